//! Preprocessor driver: CSV records -> charts indexed by row `index`.
//!
//! Performs:
//! - concatenate rows from every input file, in argument order
//! - run each chart generator that supports a row, appending to `output[index]`
//! - stamp one shared y-axis max (global max + margin) onto every chart

use crate::chart::{ChartRecord, Visualization, generate_all};
use crate::error::{FormatError, FormatResult};
use crate::table::{Cell, Row, Table, parse_csv_file};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

pub const INDEX_COLUMN: &str = "index";
pub const LABEL_COLUMN: &str = "Label";

/// Headroom above the largest value so lines never touch the chart border.
pub const TOP_CHART_MARGIN: f64 = 10.0;

/// Largest accepted row index. The output is a dense array, so an index is
/// also an allocation size; atlas region ids stay far below this.
pub const MAX_ROW_INDEX: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    pub top_chart_margin: f64,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            top_chart_margin: TOP_CHART_MARGIN,
        }
    }
}

/// Charts per row index. Indices no row mentions are `None` (JSON `null`).
pub type IndexedVisualizations = Vec<Option<Vec<Visualization>>>;

fn row_index(row: &Row) -> FormatResult<usize> {
    let invalid = |value: String| FormatError::InvalidIndex {
        line: row.line,
        value,
    };
    match row.get(INDEX_COLUMN) {
        Some(Cell::Number(v))
            if *v >= 0.0 && v.fract() == 0.0 && *v <= MAX_ROW_INDEX as f64 =>
        {
            Ok(*v as usize)
        }
        Some(cell) => Err(invalid(cell.to_string())),
        None => Err(invalid(String::new())),
    }
}

/// Split a row into its index and the record the generators see.
pub fn to_record(row: &Row) -> FormatResult<(usize, ChartRecord)> {
    let index = row_index(row)?;
    let columns = row.numbers_except(&[INDEX_COLUMN, LABEL_COLUMN])?;
    Ok((index, ChartRecord::new(row.text(LABEL_COLUMN), columns)))
}

/// Largest data value over all records, never below 0.
pub fn global_max<'a>(records: impl IntoIterator<Item = &'a ChartRecord>) -> f64 {
    records
        .into_iter()
        .flat_map(|r| r.columns.iter().map(|(_, v)| *v))
        .fold(0.0, f64::max)
}

pub fn stamp_y_axis_max(output: &mut IndexedVisualizations, max: f64) {
    for chart in output.iter_mut().flatten().flatten() {
        chart.data.y_axis.max = Some(max);
    }
}

pub fn build_visualizations(
    rows: &[Row],
    options: &PreprocessOptions,
) -> FormatResult<IndexedVisualizations> {
    if rows.is_empty() {
        return Err(FormatError::NoParsableRows);
    }

    let records = rows.iter().map(to_record).collect::<FormatResult<Vec<_>>>()?;

    let mut output = IndexedVisualizations::new();
    for (row, (index, record)) in rows.iter().zip(&records) {
        let charts = generate_all(record)?;
        if charts.is_empty() {
            debug!(line = row.line, index, "no chart supports this row");
        }
        if output.len() <= *index {
            output.resize(*index + 1, None);
        }
        output[*index].get_or_insert_with(Vec::new).extend(charts);
    }

    let max = global_max(records.iter().map(|(_, r)| r));
    stamp_y_axis_max(&mut output, max + options.top_chart_margin);
    info!(
        rows = rows.len(),
        entries = output.len(),
        y_axis_max = max + options.top_chart_margin,
        "built visualizations"
    );
    Ok(output)
}

/// Read every file (in parallel), concatenate rows in argument order, build charts.
pub fn preprocess_files(
    files: &[PathBuf],
    options: &PreprocessOptions,
) -> anyhow::Result<IndexedVisualizations> {
    let tables = files
        .par_iter()
        .map(|path| parse_csv_file(path))
        .collect::<anyhow::Result<Vec<Table>>>()?;
    let rows: Table = tables.into_iter().flatten().collect();
    Ok(build_visualizations(&rows, options)?)
}
