//! Unified application error type.
//! The schedule parser has its own `ParseError` so callers can tell a soft
//! "nothing to show" outcome from a broken file; everything else (config,
//! cli, output) returns AppError.

use std::io;
use thiserror::Error;

/// Errors raised while turning raw roster text into a `ScheduleSet`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No header, or a header with no data rows. Never surfaced by
    /// `parser::parse`, which maps it to an empty schedule set.
    #[error("file empty or wrong format")]
    EmptyOrMalformed,

    #[error("invalid CSV header, missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid time format: \"{0}\", expected HH:MM")]
    InvalidTime(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Error processing the file: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day-off value: {0} (expected NAME@HH:MM)")]
    InvalidDayOff(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("The file is empty or in the wrong format: {0}")]
    EmptySchedule(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
