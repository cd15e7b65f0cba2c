use super::model::StatusSnapshot;
use crate::errors::AppResult;
use std::io::Write;

/// Pretty-printed JSON snapshot followed by a newline.
pub fn write_json<W: Write>(mut out: W, snapshot: &StatusSnapshot<'_>) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, snapshot)?;
    writeln!(out)?;
    Ok(())
}
