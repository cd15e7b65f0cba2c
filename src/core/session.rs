//! The monitoring session: owns the active roster and the latest
//! classification, and recomputes it on every tick or roster change.

use crate::core::classifier::{Windows, classify_with};
use crate::core::day_off::mark_day_off;
use crate::core::parser;
use crate::errors::ParseError;
use crate::models::{ScheduleSet, StatusBuckets};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

/// Message recorded when a file parses but yields no operators.
pub const EMPTY_SCHEDULE_MESSAGE: &str =
    "The uploaded file is empty or in the wrong format. Please check the file and try again.";

pub struct MonitorSession {
    schedules: ScheduleSet,
    source_name: String,
    error: Option<String>,
    windows: Windows,
    now: NaiveDateTime,
    buckets: StatusBuckets,
}

impl MonitorSession {
    pub fn new(now: NaiveDateTime, windows: Windows) -> Self {
        Self {
            schedules: ScheduleSet::default(),
            source_name: String::new(),
            error: None,
            windows,
            now,
            buckets: StatusBuckets::default(),
        }
    }

    /// Replace the roster with the contents of `raw`.
    ///
    /// On a hard parse error the session is cleared and the error returned;
    /// an empty roster is not an error but leaves [`Self::error`] set.
    pub fn load(&mut self, source_name: &str, raw: &str, reference: NaiveDate) -> Result<(), ParseError> {
        self.error = None;
        self.source_name = source_name.to_string();

        match parser::parse_on(raw, reference) {
            Ok(set) => {
                if set.is_empty() {
                    warn!(source = source_name, "roster has no operators");
                    self.error = Some(EMPTY_SCHEDULE_MESSAGE.to_string());
                } else {
                    info!(
                        source = source_name,
                        operators = set.len(),
                        breaks = set.break_count(),
                        "roster loaded"
                    );
                }
                self.on_schedule_change(set);
                Ok(())
            }
            Err(e) => {
                warn!(source = source_name, error = %e, "roster rejected");
                self.error = Some(format!("Error processing the file: {e}"));
                self.on_schedule_change(ScheduleSet::default());
                Err(e)
            }
        }
    }

    /// Drop the roster and everything derived from it.
    pub fn reset(&mut self) {
        self.source_name.clear();
        self.error = None;
        self.on_schedule_change(ScheduleSet::default());
    }

    /// Advance the clock and reclassify.
    pub fn on_tick(&mut self, now: NaiveDateTime) -> &StatusBuckets {
        self.now = now;
        self.refresh();
        &self.buckets
    }

    /// Commit a new roster and reclassify against the current instant.
    pub fn on_schedule_change(&mut self, schedules: ScheduleSet) -> &StatusBuckets {
        self.schedules = schedules;
        self.refresh();
        &self.buckets
    }

    /// Give `operator_name` the rest of the day off from `from_break_start`.
    pub fn mark_day_off(&mut self, operator_name: &str, from_break_start: NaiveDateTime) -> &StatusBuckets {
        let updated = mark_day_off(&self.schedules, operator_name, from_break_start);
        self.on_schedule_change(updated)
    }

    fn refresh(&mut self) {
        self.buckets = classify_with(self.now, &self.schedules, &self.windows).sorted();
    }

    pub fn schedules(&self) -> &ScheduleSet {
        &self.schedules
    }

    /// Latest classification, already in display order.
    pub fn buckets(&self) -> &StatusBuckets {
        &self.buckets
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_schedules(&self) -> bool {
        !self.schedules.is_empty()
    }
}
