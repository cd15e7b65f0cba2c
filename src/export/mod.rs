mod csv;
mod json;
mod model;

pub use model::{StatusRow, StatusSnapshot, status_rows};

use crate::errors::{AppError, AppResult};
use crate::models::StatusBuckets;
use crate::ui::messages::success;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Confirmation line printed once an output file is complete.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Write a machine-readable snapshot (`json` or `csv`) to `out`.
/// `Text` is rendered by the panels and never reaches this function.
pub fn write_snapshot<W: Write>(
    format: ExportFormat,
    out: W,
    now: NaiveDateTime,
    buckets: &StatusBuckets,
) -> AppResult<()> {
    match format {
        ExportFormat::Json => json::write_json(out, &StatusSnapshot::new(now, buckets)),
        ExportFormat::Csv => csv::write_csv(out, &status_rows(buckets)),
        ExportFormat::Text => Ok(()),
    }
}

/// Write `text` (already rendered) or a snapshot to a file. An existing
/// file is only replaced when `force` is set.
pub fn write_to_file(
    path: &Path,
    force: bool,
    format: ExportFormat,
    now: NaiveDateTime,
    buckets: &StatusBuckets,
    text: &str,
) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::OutputExists(path.display().to_string()));
    }
    let mut out = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Text => out.write_all(text.as_bytes())?,
        other => write_snapshot(other, &mut out, now, buckets)?,
    }
    out.flush()?;
    notify_export_success(&format!("Status {}", format.as_str()), path);
    Ok(())
}

/// Same as [`write_to_file`] but to stdout.
pub fn write_to_stdout(
    format: ExportFormat,
    now: NaiveDateTime,
    buckets: &StatusBuckets,
    text: &str,
) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        ExportFormat::Text => out.write_all(text.as_bytes())?,
        other => write_snapshot(other, &mut out, now, buckets)?,
    }
    out.flush()?;
    Ok(())
}
