use super::break_kind::BreakKind;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One scheduled break: a kind plus its start and (derived) end instant.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BreakInterval {
    pub kind: BreakKind,
    #[serde(serialize_with = "serialize_instant")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "serialize_instant")]
    pub end: NaiveDateTime,
}

impl BreakInterval {
    /// Build a break starting at `start`; the end is `start + kind.duration()`.
    pub fn new(kind: BreakKind, start: NaiveDateTime) -> Self {
        Self {
            kind,
            start,
            end: start + kind.duration(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    /// "HH:MM-HH:MM", as shown in the roster table.
    pub fn span_str(&self) -> String {
        format!("{}-{}", self.start_str(), self.end_str())
    }
}

fn serialize_instant<S>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}
