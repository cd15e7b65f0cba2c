//! Day-off edit: drop an operator's breaks from a given break onward.

use crate::models::{OperatorSchedule, ScheduleSet};
use chrono::NaiveDateTime;
use tracing::debug;

/// Return a copy of `schedules` where every schedule named `operator_name`
/// keeps only the breaks starting strictly before `from_break_start`.
///
/// Never fails: an unknown name returns an identical set. Applying it again
/// with the same or a later instant changes nothing.
pub fn mark_day_off(
    schedules: &ScheduleSet,
    operator_name: &str,
    from_break_start: NaiveDateTime,
) -> ScheduleSet {
    let mut removed = 0usize;

    let updated: ScheduleSet = schedules
        .iter()
        .map(|schedule| {
            if schedule.operator_name != operator_name {
                return schedule.clone();
            }
            let kept: Vec<_> = schedule
                .breaks
                .iter()
                .filter(|b| b.start < from_break_start)
                .copied()
                .collect();
            removed += schedule.breaks.len() - kept.len();
            OperatorSchedule::new(schedule.operator_name.clone(), kept)
        })
        .collect();

    debug!(
        operator = operator_name,
        from = %from_break_start,
        removed,
        "day off applied"
    );
    updated
}
