//! Time utilities: strict HH:MM parsing and anchoring a time of day on a
//! reference date.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("valid HH:MM regex"))
}

/// Parse a strict `HH:MM` string: exactly five characters, 24-hour clock.
///
/// `"9:05"`, `"09:5"`, `"09h05"`, `"24:00"` and `"09:60"` are all rejected.
pub fn parse_hhmm(t: &str) -> Option<NaiveTime> {
    if t.chars().count() != 5 {
        return None;
    }
    let caps = hhmm_re().captures(t)?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Apply a time of day on `date`, seconds and sub-seconds zeroed.
pub fn at_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Parse `HH:MM` and anchor it on `date`.
pub fn parse_instant(t: &str, date: NaiveDate) -> AppResult<NaiveDateTime> {
    let time = parse_hhmm(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(at_time(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn accepts_strict_hhmm() {
        let t = parse_hhmm("07:45").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 45, 0));
        assert!(parse_hhmm("00:00").is_some());
        assert!(parse_hhmm("23:59").is_some());
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["9:05", "09:5", "0905", "09-05", "ab:cd", "24:00", "12:60", "09:05:00", " 9:05", "1:234"] {
            assert!(parse_hhmm(bad).is_none(), "{bad} should be rejected");
        }
    }
}
