use super::break_interval::BreakInterval;
use serde::Serialize;

/// Which panel a classified break belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    OnBreak,
    Upcoming,
    RecentlyEnded,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::OnBreak, Bucket::Upcoming, Bucket::RecentlyEnded];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::OnBreak => "on_break",
            Bucket::Upcoming => "upcoming",
            Bucket::RecentlyEnded => "recently_ended",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::OnBreak => "On break now",
            Bucket::Upcoming => "Next to break",
            Bucket::RecentlyEnded => "Recently ended",
        }
    }

    /// Header of the time column: return time for the end-keyed panels,
    /// start time for the upcoming one.
    pub fn time_header(&self) -> &'static str {
        match self {
            Bucket::OnBreak => "Returns at",
            Bucket::Upcoming => "Starts at",
            Bucket::RecentlyEnded => "Expected return",
        }
    }

    pub fn is_keyed_by_start(&self) -> bool {
        matches!(self, Bucket::Upcoming)
    }
}

/// A `(operator, break)` pair produced by classification.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusEntry {
    pub operator_name: String,
    pub break_item: BreakInterval,
}

impl StatusEntry {
    pub fn new(operator_name: &str, break_item: BreakInterval) -> Self {
        Self {
            operator_name: operator_name.to_string(),
            break_item,
        }
    }
}

/// The three disjoint result sets of one classification pass.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StatusBuckets {
    pub on_break: Vec<StatusEntry>,
    pub upcoming: Vec<StatusEntry>,
    pub recently_ended: Vec<StatusEntry>,
}

impl StatusBuckets {
    pub fn get(&self, bucket: Bucket) -> &[StatusEntry] {
        match bucket {
            Bucket::OnBreak => &self.on_break,
            Bucket::Upcoming => &self.upcoming,
            Bucket::RecentlyEnded => &self.recently_ended,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_break.is_empty() && self.upcoming.is_empty() && self.recently_ended.is_empty()
    }

    /// Display order: on-break and recently-ended by end time, upcoming by
    /// start time. The sort is stable, so ties keep roster order.
    pub fn sorted(mut self) -> Self {
        self.on_break.sort_by_key(|e| e.break_item.end);
        self.upcoming.sort_by_key(|e| e.break_item.start);
        self.recently_ended.sort_by_key(|e| e.break_item.end);
        self
    }
}
