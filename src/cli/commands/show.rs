use super::{load_session, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::session::MonitorSession;
use crate::errors::AppResult;
use crate::ui::panels::{RenderOptions, render_roster};

/// Handle the `show` command: parse the roster and print it.
pub fn handle(cmd: &Commands, cfg: &Config, opts: &RenderOptions) -> AppResult<()> {
    if let Commands::Show { file, date } = cmd {
        let reference = reference_date(date)?;
        let mut session = MonitorSession::new(SystemClock.now(), cfg.windows());
        load_session(&mut session, file, reference, &[])?;

        println!("📋 Roster: {} ({})\n", session.source_name(), reference);
        print!("{}", render_roster(session.schedules(), opts));
    }
    Ok(())
}
