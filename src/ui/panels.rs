//! Text rendering of the roster and of the three status panels.

use crate::models::{BreakKind, Bucket, ScheduleSet, StatusBuckets, StatusEntry};
use crate::utils::colors::{color_for_bucket, color_for_kind, colorize_optional, paint};
use crate::utils::formatting::{bold, separator};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDateTime;

/// Rendering switches taken from the configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub use_colors: bool,
    pub separator_char: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_colors: false,
            separator_char: "-".to_string(),
        }
    }
}

fn title_colour(bucket: Bucket) -> Colour {
    match bucket {
        Bucket::OnBreak => Colour::Red,
        Bucket::Upcoming => Colour::Yellow,
        Bucket::RecentlyEnded => Colour::White,
    }
}

fn relative(bucket: Bucket, entry: &StatusEntry, now: NaiveDateTime) -> String {
    let item = &entry.break_item;
    match bucket {
        Bucket::OnBreak => format!("{} left", mins2readable((item.end - now).num_minutes())),
        Bucket::Upcoming => format!("in {}", mins2readable((item.start - now).num_minutes())),
        Bucket::RecentlyEnded => format!("{} ago", mins2readable((now - item.end).num_minutes())),
    }
}

/// One panel: a coloured title with its count, then the entries in the
/// order they come in (callers pass sorted buckets).
pub fn render_panel(bucket: Bucket, entries: &[StatusEntry], now: NaiveDateTime, opts: &RenderOptions) -> String {
    let title = format!("{} ({})", bucket.title(), entries.len());
    let mut out = if opts.use_colors {
        title_colour(bucket).bold().paint(title).to_string()
    } else {
        title
    };
    out.push('\n');

    if entries.is_empty() {
        out.push_str("  No operators in this category.\n");
        return out;
    }

    let mut table = Table::new(vec![
        Column::left("Operator"),
        Column::left("Break"),
        Column::right(bucket.time_header()),
        Column::right(""),
    ]);
    for entry in entries {
        let item = &entry.break_item;
        let time = if bucket.is_keyed_by_start() {
            item.start_str()
        } else {
            item.end_str()
        };
        table.add_row(vec![
            entry.operator_name.clone(),
            paint(item.kind.badge(), color_for_kind(item.kind), opts.use_colors),
            paint(&time, color_for_bucket(bucket), opts.use_colors),
            relative(bucket, entry, now),
        ]);
    }

    for line in table.render().lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// The full dashboard: clock header plus the three panels.
pub fn render_dashboard(
    source_name: &str,
    now: NaiveDateTime,
    buckets: &StatusBuckets,
    opts: &RenderOptions,
) -> String {
    let clock = now.format("%H:%M:%S").to_string();
    let header = format!("Live panel: {} | current time {}", source_name, clock);
    let rule = separator(&opts.separator_char, 60);

    let mut out = String::new();
    out.push_str(&if opts.use_colors { bold(&header) } else { header });
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for bucket in Bucket::ALL {
        out.push_str(&render_panel(bucket, buckets.get(bucket), now, opts));
        out.push('\n');
    }
    out
}

/// The loaded roster, one row per schedule with the three break spans.
pub fn render_roster(schedules: &ScheduleSet, opts: &RenderOptions) -> String {
    let mut table = Table::new(vec![
        Column::left("Operator"),
        Column::left("D1"),
        Column::left("ALM"),
        Column::left("D2"),
    ]);

    for schedule in schedules {
        let mut row = vec![schedule.operator_name.clone()];
        for kind in BreakKind::ALL {
            let span = schedule
                .breaks
                .iter()
                .find(|b| b.kind == kind)
                .map(|b| b.span_str())
                .unwrap_or_default();
            row.push(colorize_optional(&span, opts.use_colors));
        }
        table.add_row(row);
    }

    let mut out = table.render();
    out.push_str(&separator(&opts.separator_char, 40));
    out.push('\n');
    for kind in BreakKind::ALL {
        out.push_str(&format!(
            "{} = {} ({} min)\n",
            kind.badge(),
            kind.label(),
            kind.duration_minutes()
        ));
    }
    out.push_str(&format!(
        "{} operators, {} breaks\n",
        schedules.len(),
        schedules.break_count()
    ));
    out
}
