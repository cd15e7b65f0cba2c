use chrono::Duration;
use serde::Serialize;

/// Nominal length of the two rest breaks, in minutes.
pub const REST_BREAK_MINUTES: i64 = 10;
/// Nominal length of the meal break, in minutes.
pub const MEAL_BREAK_MINUTES: i64 = 20;

/// The three breaks an operator gets during a shift.
///
/// The set is closed: every roster row carries at most one of each, always
/// assembled in the order `FirstRest`, `Meal`, `SecondRest`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    FirstRest,
    Meal,
    SecondRest,
}

impl BreakKind {
    /// Column order used when assembling a schedule row.
    pub const ALL: [BreakKind; 3] = [BreakKind::FirstRest, BreakKind::Meal, BreakKind::SecondRest];

    pub fn duration_minutes(&self) -> i64 {
        match self {
            BreakKind::FirstRest | BreakKind::SecondRest => REST_BREAK_MINUTES,
            BreakKind::Meal => MEAL_BREAK_MINUTES,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes())
    }

    /// Header label of the start-time column in the roster file.
    pub const fn column_label(&self) -> &'static str {
        match self {
            BreakKind::FirstRest => "1º DESCANSO",
            BreakKind::Meal => "ALIMENTAÇÃO INI",
            BreakKind::SecondRest => "2º DESCANSO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreakKind::FirstRest => "1º Descanso",
            BreakKind::Meal => "Alimentação",
            BreakKind::SecondRest => "2º Descanso",
        }
    }

    /// Short badge shown in the status panels.
    pub fn badge(&self) -> &'static str {
        match self {
            BreakKind::FirstRest => "D1",
            BreakKind::Meal => "ALM",
            BreakKind::SecondRest => "D2",
        }
    }
}
