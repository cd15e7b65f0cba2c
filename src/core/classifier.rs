//! Break-status classification.
//!
//! Every `(operator, break)` pair is placed in at most one bucket:
//!
//! | bucket          | condition                         |
//! |-----------------|-----------------------------------|
//! | on break        | `start <= now < end`              |
//! | upcoming        | `now < start <= now + upcoming`   |
//! | recently ended  | `end < now < end + recent`        |
//!
//! The recently-ended window is open on both sides, unlike the other two.
//! A break is therefore in no bucket at exactly `now == end`.

use crate::models::{ScheduleSet, StatusBuckets, StatusEntry};
use chrono::{Duration, NaiveDateTime};
use tracing::trace;

/// How far ahead a break counts as upcoming, in minutes.
pub const UPCOMING_WINDOW_MINUTES: i64 = 10;
/// How long after its end a break stays visible, in minutes.
pub const RECENT_WINDOW_MINUTES: i64 = 15;

/// Look-ahead and look-behind windows used by [`classify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    pub upcoming: Duration,
    pub recent: Duration,
}

impl Default for Windows {
    fn default() -> Self {
        Self::from_minutes(UPCOMING_WINDOW_MINUTES, RECENT_WINDOW_MINUTES)
    }
}

impl Windows {
    /// Out-of-range lengths saturate to `Duration::MAX`.
    pub fn from_minutes(upcoming: i64, recent: i64) -> Self {
        Self {
            upcoming: Duration::try_minutes(upcoming).unwrap_or(Duration::MAX),
            recent: Duration::try_minutes(recent).unwrap_or(Duration::MAX),
        }
    }
}

/// Classify every break of `schedules` against `now` with the default windows.
pub fn classify(now: NaiveDateTime, schedules: &ScheduleSet) -> StatusBuckets {
    classify_with(now, schedules, &Windows::default())
}

/// Classify every break of `schedules` against `now`.
///
/// Stateless: the buckets are rebuilt from scratch on each call and `now`
/// may be any instant, earlier calls notwithstanding. Entries come out in
/// roster order; use [`StatusBuckets::sorted`] before display.
pub fn classify_with(now: NaiveDateTime, schedules: &ScheduleSet, windows: &Windows) -> StatusBuckets {
    let upcoming_limit = now
        .checked_add_signed(windows.upcoming)
        .unwrap_or(NaiveDateTime::MAX);
    let mut buckets = StatusBuckets::default();

    for schedule in schedules {
        for item in &schedule.breaks {
            let entry = || StatusEntry::new(&schedule.operator_name, *item);

            if item.start <= now && now < item.end {
                buckets.on_break.push(entry());
            } else if now < item.start && item.start <= upcoming_limit {
                buckets.upcoming.push(entry());
            } else if item.end < now
                && item
                    .end
                    .checked_add_signed(windows.recent)
                    .is_none_or(|limit| now < limit)
            {
                buckets.recently_ended.push(entry());
            }
        }
    }

    trace!(
        now = %now,
        on_break = buckets.on_break.len(),
        upcoming = buckets.upcoming.len(),
        recently_ended = buckets.recently_ended.len(),
        "classified breaks"
    );
    buckets
}
