use super::model::StatusRow;
use crate::errors::AppResult;
use csv::Writer;
use std::io::Write;

/// Write the status rows as CSV, header first.
pub fn write_csv<W: Write>(out: W, rows: &[StatusRow]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(["bucket", "operator", "kind", "start", "end"])?;
    for row in rows {
        wtr.write_record([
            row.bucket,
            row.operator.as_str(),
            row.kind,
            row.start.as_str(),
            row.end.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
