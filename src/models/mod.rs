pub mod break_interval;
pub mod break_kind;
pub mod schedule;
pub mod status;

pub use break_interval::BreakInterval;
pub use break_kind::BreakKind;
pub use schedule::{OperatorSchedule, ScheduleSet};
pub use status::{Bucket, StatusBuckets, StatusEntry};
