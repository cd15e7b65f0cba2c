use super::break_interval::BreakInterval;
use serde::Serialize;

/// The breaks of one roster row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperatorSchedule {
    pub operator_name: String,
    pub breaks: Vec<BreakInterval>,
}

impl OperatorSchedule {
    pub fn new(operator_name: impl Into<String>, breaks: Vec<BreakInterval>) -> Self {
        Self {
            operator_name: operator_name.into(),
            breaks,
        }
    }
}

/// The full roster loaded from one file, in file order.
///
/// Duplicate operator names are kept as separate entries.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScheduleSet {
    schedules: Vec<OperatorSchedule>,
}

impl ScheduleSet {
    pub fn new(schedules: Vec<OperatorSchedule>) -> Self {
        Self { schedules }
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperatorSchedule> {
        self.schedules.iter()
    }

    pub fn schedules(&self) -> &[OperatorSchedule] {
        &self.schedules
    }

    /// All schedules sharing `name` (exact match).
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OperatorSchedule> + 'a {
        self.schedules.iter().filter(move |s| s.operator_name == name)
    }

    pub fn break_count(&self) -> usize {
        self.schedules.iter().map(|s| s.breaks.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ScheduleSet {
    type Item = &'a OperatorSchedule;
    type IntoIter = std::slice::Iter<'a, OperatorSchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.schedules.iter()
    }
}

impl FromIterator<OperatorSchedule> for ScheduleSet {
    fn from_iter<I: IntoIterator<Item = OperatorSchedule>>(iter: I) -> Self {
        Self {
            schedules: iter.into_iter().collect(),
        }
    }
}
