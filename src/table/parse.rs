use crate::error::FormatResult;
use crate::table::row::{Cell, Row, Table};
use anyhow::Context;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Shared reader options: comma delimiter, a header row, trimmed cells.
fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Parse CSV records into rows keyed by header name.
///
/// Cells that are empty after trimming become `Cell::Empty`; they still
/// exist as text (`""`) but never as a number.
pub fn parse_csv<R: Read>(input: R) -> FormatResult<Table> {
    let mut rdr = reader(input);
    let headers = rdr.headers()?.clone();

    let mut out = Table::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is line 1; fall back to that assumption when the reader has
        // no position (it always does for file and slice readers).
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(name, raw)| (name.to_string(), Cell::detect(raw)))
            .collect();

        out.push(Row { line, cells });
    }
    Ok(out)
}

pub fn parse_csv_str(text: &str) -> FormatResult<Table> {
    parse_csv(text.as_bytes())
}

/// Read and parse one CSV file.
pub fn parse_csv_file(path: &Path) -> anyhow::Result<Table> {
    let file =
        File::open(path).with_context(|| format!("read csv file {}", path.display()))?;
    let rows = parse_csv(file).with_context(|| format!("parse csv file {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "parsed csv file");
    Ok(rows)
}
