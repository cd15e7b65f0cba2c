pub mod config;
pub mod init;
pub mod show;
pub mod status;
pub mod watch;

use crate::core::session::MonitorSession;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_instant;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tracing::debug;

/// Resolve the `--date` option, defaulting to today.
pub(crate) fn reference_date(opt: &Option<String>) -> AppResult<NaiveDate> {
    match opt {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// Split a `NAME@HH:MM` day-off request. The name may itself contain `@`;
/// the last one separates the time.
pub(crate) fn parse_day_off(value: &str, reference: NaiveDate) -> AppResult<(String, NaiveDateTime)> {
    let (name, time) = value
        .rsplit_once('@')
        .ok_or_else(|| AppError::InvalidDayOff(value.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidDayOff(value.to_string()));
    }
    let start = parse_instant(time.trim(), reference)
        .map_err(|_| AppError::InvalidDayOff(value.to_string()))?;
    Ok((name.to_string(), start))
}

/// Read the roster file into `session`, then apply every `--off` request.
///
/// A hard parse error and an empty roster both end the command: there is
/// nothing to display in either case.
pub(crate) fn load_session(
    session: &mut MonitorSession,
    file: &str,
    reference: NaiveDate,
    day_offs: &[String],
) -> AppResult<()> {
    let path = expand_tilde(file);
    let raw = fs::read_to_string(&path)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string());

    session.load(&source, &raw, reference)?;
    if !session.has_schedules() {
        return Err(AppError::EmptySchedule(source));
    }

    for value in day_offs {
        let (name, start) = parse_day_off(value, reference)?;
        debug!(operator = %name, from = %start, "applying day off from command line");
        session.mark_day_off(&name, start);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn day_off_values_are_split_on_the_last_at() {
        let (name, start) = parse_day_off("Ana Silva@12:30", day()).unwrap();
        assert_eq!(name, "Ana Silva");
        assert_eq!(start, day().and_hms_opt(12, 30, 0).unwrap());

        let (name, _) = parse_day_off("ana@corp@09:00", day()).unwrap();
        assert_eq!(name, "ana@corp");
    }

    #[test]
    fn malformed_day_off_values_are_rejected() {
        for bad in ["Ana Silva", "@10:00", "Ana@10h00", "Ana@"] {
            assert!(matches!(parse_day_off(bad, day()), Err(AppError::InvalidDayOff(_))));
        }
    }

    #[test]
    fn reference_date_validates_input() {
        assert_eq!(reference_date(&Some("2025-03-10".into())).unwrap(), day());
        assert!(matches!(
            reference_date(&Some("10/03/2025".into())),
            Err(AppError::InvalidDate(_))
        ));
    }
}
