//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Minutes rendered for the panels: "in 05m", "03m left", "12m ago".
/// Past the hour the value switches to "01h 15m".
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if hours == 0 {
        format!("{:02}m", abs_m)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Horizontal rule built from the configured separator character.
pub fn separator(ch: &str, width: usize) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(width)
}
