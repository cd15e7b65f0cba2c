//! Roster ingestion: raw comma-delimited text into a `ScheduleSet`.
//!
//! The format is a plain split on `,` with no quoting. The first non-blank
//! line is the header; the required columns are located by label, so extra
//! columns and any column order are accepted.

use crate::errors::ParseError;
use crate::models::{BreakInterval, BreakKind, OperatorSchedule, ScheduleSet};
use crate::utils::date;
use crate::utils::time::{at_time, parse_hhmm};
use chrono::NaiveDate;
use tracing::debug;

/// Header label of the operator-name column.
pub const NAME_COLUMN: &str = "NOME";

/// Every label the header must carry, in the order reported on error.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    NAME_COLUMN,
    BreakKind::FirstRest.column_label(),
    BreakKind::Meal.column_label(),
    BreakKind::SecondRest.column_label(),
];

/// Positions of the required columns inside a data row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    breaks: [(BreakKind, usize); 3],
}

impl ColumnMap {
    fn from_header(line: &str) -> Result<Self, ParseError> {
        let labels: Vec<String> = line.split(',').map(|h| h.trim().to_uppercase()).collect();
        let index_of = |wanted: &str| labels.iter().position(|l| l == wanted);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&c| index_of(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ParseError::MissingColumns(missing));
        }

        // Every label was found above.
        let pos = |wanted: &str| index_of(wanted).unwrap_or_default();
        Ok(Self {
            name: pos(NAME_COLUMN),
            breaks: BreakKind::ALL.map(|kind| (kind, pos(kind.column_label()))),
        })
    }
}

/// Parse a roster using today's local date as the reference day.
pub fn parse(raw: &str) -> Result<ScheduleSet, ParseError> {
    parse_on(raw, date::today())
}

/// Parse a roster anchoring every `HH:MM` on `reference`.
///
/// Empty input, or a header without data rows, yields an empty set rather
/// than an error; callers decide how to report "nothing to show".
pub fn parse_on(raw: &str, reference: NaiveDate) -> Result<ScheduleSet, ParseError> {
    match parse_strict(raw, reference) {
        Err(ParseError::EmptyOrMalformed) => {
            debug!("roster has no data rows, returning an empty schedule set");
            Ok(ScheduleSet::default())
        }
        other => other,
    }
}

/// Like [`parse_on`], but reports an empty roster as
/// `ParseError::EmptyOrMalformed`.
pub fn parse_strict(raw: &str, reference: NaiveDate) -> Result<ScheduleSet, ParseError> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(ParseError::EmptyOrMalformed)?;
    let mut rows = lines.peekable();
    if rows.peek().is_none() {
        return Err(ParseError::EmptyOrMalformed);
    }

    let columns = ColumnMap::from_header(header.trim_start_matches('\u{feff}'))?;

    let mut schedules = Vec::new();
    for (row_no, row) in rows.enumerate() {
        match parse_row(row, &columns, reference)? {
            Some(schedule) => schedules.push(schedule),
            None => debug!(row = row_no + 1, "skipping roster row without operator name"),
        }
    }

    debug!(
        operators = schedules.len(),
        reference = %reference,
        "roster parsed"
    );
    Ok(ScheduleSet::new(schedules))
}

fn parse_row(
    row: &str,
    columns: &ColumnMap,
    reference: NaiveDate,
) -> Result<Option<OperatorSchedule>, ParseError> {
    let values: Vec<&str> = row.split(',').collect();
    let field = |idx: usize| values.get(idx).map(|v| v.trim()).unwrap_or("");

    let name = field(columns.name);
    if name.is_empty() {
        return Ok(None);
    }

    let mut breaks = Vec::with_capacity(columns.breaks.len());
    for (kind, idx) in columns.breaks {
        let value = field(idx);
        if value.is_empty() {
            continue;
        }
        let time = parse_hhmm(value).ok_or_else(|| ParseError::InvalidTime(value.to_string()))?;
        breaks.push(BreakInterval::new(kind, at_time(reference, time)));
    }

    Ok(Some(OperatorSchedule::new(name, breaks)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    const HEADER: &str = "NOME,1º DESCANSO,ALIMENTAÇÃO INI,2º DESCANSO";

    #[test]
    fn parses_rows_with_derived_end_times() {
        let raw = format!("{HEADER}\nAna Silva,10:00,12:30,15:45\n");
        let set = parse_on(&raw, day()).unwrap();

        assert_eq!(set.len(), 1);
        let ana = &set.schedules()[0];
        assert_eq!(ana.operator_name, "Ana Silva");
        assert_eq!(ana.breaks.len(), 3);

        let kinds: Vec<BreakKind> = ana.breaks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, BreakKind::ALL.to_vec());

        for b in &ana.breaks {
            assert_eq!(b.start.date(), day());
            assert_eq!(b.start.second(), 0);
            assert_eq!(b.end - b.start, b.kind.duration());
        }
        assert_eq!((ana.breaks[1].start.hour(), ana.breaks[1].start.minute()), (12, 30));
        assert_eq!(ana.breaks[1].end - ana.breaks[1].start, Duration::minutes(20));
    }

    #[test]
    fn every_valid_time_keeps_hour_and_minute() {
        for h in 0..24 {
            for m in [0, 1, 15, 30, 59] {
                let raw = format!("{HEADER}\nBruno,{h:02}:{m:02},,\n");
                let set = parse_on(&raw, day()).unwrap();
                let b = set.schedules()[0].breaks[0];
                assert_eq!((b.start.hour(), b.start.minute()), (h, m));
                assert_eq!(b.end, b.start + Duration::minutes(10));
            }
        }
    }

    #[test]
    fn malformed_time_fails_the_whole_file_for_every_column() {
        let bad_values = ["9:05", "09:5", "0905", "ab:cd", "09-05", "9:005"];
        for col in 0..3 {
            for bad in bad_values {
                let mut cells = ["", "", ""];
                cells[col] = bad;
                let raw = format!(
                    "{HEADER}\nCarla,,,\nDavi,{},{},{}\n",
                    cells[0], cells[1], cells[2]
                );
                let err = parse_on(&raw, day()).unwrap_err();
                assert_eq!(err, ParseError::InvalidTime(bad.to_string()));
                assert!(err.to_string().contains(bad));
            }
        }
    }

    #[test]
    fn missing_columns_are_all_named() {
        let err = parse_on("NOME,2º DESCANSO,TURNO\nAna,10:00,A\n", day()).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingColumns(vec![
                "1º DESCANSO".to_string(),
                "ALIMENTAÇÃO INI".to_string(),
            ])
        );
        let msg = err.to_string();
        assert!(msg.contains("1º DESCANSO") && msg.contains("ALIMENTAÇÃO INI"));
    }

    #[test]
    fn header_is_case_insensitive_and_order_free() {
        let raw = "matricula, 2º descanso ,Nome,Alimentação Ini,setor,1º Descanso\n\
                   123,16:00,Ana Silva,12:00,A,09:30\n";
        let set = parse_on(raw, day()).unwrap();
        let ana = &set.schedules()[0];
        assert_eq!(ana.operator_name, "Ana Silva");
        assert_eq!(ana.breaks[0].start_str(), "09:30");
        assert_eq!(ana.breaks[1].start_str(), "12:00");
        assert_eq!(ana.breaks[2].start_str(), "16:00");
    }

    #[test]
    fn empty_names_are_dropped_and_breakless_rows_kept() {
        let raw = format!("{HEADER}\n  ,10:00,12:00,15:00\nEduardo,,,\n");
        let set = parse_on(&raw, day()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.schedules()[0].operator_name, "Eduardo");
        assert!(set.schedules()[0].breaks.is_empty());
    }

    #[test]
    fn short_rows_are_treated_as_missing_values() {
        let raw = format!("{HEADER}\nFabia,10:00\n");
        let set = parse_on(&raw, day()).unwrap();
        assert_eq!(set.schedules()[0].breaks.len(), 1);
        assert_eq!(set.schedules()[0].breaks[0].kind, BreakKind::FirstRest);
    }

    #[test]
    fn empty_or_header_only_input_is_a_soft_failure() {
        for raw in ["", "   \n\r\n  \n", HEADER, "NOME\n\n  \n"] {
            let set = parse_on(raw, day()).unwrap();
            assert!(set.is_empty(), "{raw:?} should yield an empty set");
            assert_eq!(parse_strict(raw, day()), Err(ParseError::EmptyOrMalformed));
        }
    }

    #[test]
    fn crlf_and_blank_lines_are_handled() {
        let raw = format!("\r\n{HEADER}\r\n\r\nAna,10:00,,\r\n   \r\nBia,,12:00,\r\n");
        let set = parse_on(&raw, day()).unwrap();
        let names: Vec<&str> = set.iter().map(|s| s.operator_name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bia"]);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let raw = format!("\u{feff}{HEADER}\nAna,10:00,,\n");
        assert_eq!(parse_on(&raw, day()).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_names_are_kept_in_file_order() {
        let raw = format!("{HEADER}\nAna,08:00,,\nBia,09:00,,\nAna,,13:00,\n");
        let set = parse_on(&raw, day()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.find("Ana").count(), 2);
        assert_eq!(set.schedules()[2].breaks[0].kind, BreakKind::Meal);
    }
}
