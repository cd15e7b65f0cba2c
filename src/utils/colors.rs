//! ANSI color helper utilities for terminal output.

use crate::models::{BreakKind, Bucket};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Panel colour:
/// on break → red
/// upcoming → yellow
/// recently ended → grey
pub fn color_for_bucket(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::OnBreak => RED,
        Bucket::Upcoming => YELLOW,
        Bucket::RecentlyEnded => GREY,
    }
}

/// Badge colour per break kind, mirroring the roster legend
/// (D1 blue, ALM magenta, D2 cyan).
pub fn color_for_kind(kind: BreakKind) -> &'static str {
    match kind {
        BreakKind::FirstRest => BLUE,
        BreakKind::Meal => MAGENTA,
        BreakKind::SecondRest => CYAN,
    }
}

/// Wrap `value` in `color` when colours are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Returns formatting for an optional roster cell: an empty cell is shown
/// as a grey `--:--`.
///
/// Example:
/// `colorize_optional("", true)` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        paint("--:--", GREY, enabled)
    } else {
        value.to_string()
    }
}
