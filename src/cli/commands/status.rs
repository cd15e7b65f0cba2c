use super::{load_session, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::session::MonitorSession;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::ui::panels::{RenderOptions, render_dashboard};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_instant;

/// Handle the `status` command: one classification, printed or written.
pub fn handle(cmd: &Commands, cfg: &Config, opts: &RenderOptions) -> AppResult<()> {
    if let Commands::Status {
        file,
        at,
        date,
        off,
        format,
        output,
        force,
    } = cmd
    {
        let reference = reference_date(date)?;
        let now = match at {
            Some(t) => FixedClock(parse_instant(t, reference)?).now(),
            None => SystemClock.now(),
        };

        let mut session = MonitorSession::new(now, cfg.windows());
        load_session(&mut session, file, reference, off)?;

        // Colour codes only make sense on a terminal.
        let text = if *format == ExportFormat::Text {
            let opts = match output {
                Some(_) => RenderOptions {
                    use_colors: false,
                    ..opts.clone()
                },
                None => opts.clone(),
            };
            render_dashboard(session.source_name(), session.now(), session.buckets(), &opts)
        } else {
            String::new()
        };

        match output {
            Some(path) => export::write_to_file(
                &expand_tilde(path),
                *force,
                *format,
                session.now(),
                session.buckets(),
                &text,
            )?,
            None => export::write_to_stdout(*format, session.now(), session.buckets(), &text)?,
        }
    }
    Ok(())
}
