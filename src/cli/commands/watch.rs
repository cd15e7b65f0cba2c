use super::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock, Ticker};
use crate::core::session::MonitorSession;
use crate::errors::AppResult;
use crate::ui::panels::{RenderOptions, render_dashboard};
use crate::ui::screen::LiveScreen;
use crate::utils::date;
use std::io;
use std::time::Duration;
use tracing::info;

/// Handle the `watch` command: redraw the dashboard on every tick.
///
/// The roster is anchored on today's date, like the wall clock driving it.
pub fn handle(cmd: &Commands, cfg: &Config, opts: &RenderOptions) -> AppResult<()> {
    if let Commands::Watch {
        file,
        interval_ms,
        ticks,
        off,
        no_clear,
    } = cmd
    {
        let mut session = MonitorSession::new(SystemClock.now(), cfg.windows());
        load_session(&mut session, file, date::today(), off)?;

        let interval = interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| cfg.tick_interval());
        let mut ticker = Ticker::new(SystemClock, interval);
        if let Some(n) = ticks {
            ticker = ticker.with_limit(*n);
        }

        info!(
            source = session.source_name(),
            interval_ms = interval.as_millis() as u64,
            "watch started"
        );

        let mut stdout = io::stdout().lock();
        let mut screen = LiveScreen::new(&mut stdout, !*no_clear)?;
        for now in ticker {
            session.on_tick(now);
            let frame = render_dashboard(session.source_name(), now, session.buckets(), opts);
            screen.draw(&frame)?;
        }
        drop(screen);

        info!(source = session.source_name(), "watch stopped");
    }
    Ok(())
}
