//! Chart generation for preprocessor records.
//!
//! A record is one CSV row minus its `index`: an optional label plus the
//! numeric data columns in header order. Each generator decides from the
//! column layout alone whether it can chart the record.

pub mod line;
pub mod range;
pub mod shape;

use crate::error::FormatResult;

pub use line::{LineChartGenerator, validate_series_columns};
pub use range::RangeChartGenerator;
pub use shape::{ChartOptions, ChartPoint, SeriesOptions, Visualization};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub label: Option<String>,
    pub columns: Vec<(String, f64)>,
}

impl ChartRecord {
    pub fn new(label: Option<String>, columns: Vec<(String, f64)>) -> Self {
        Self { label, columns }
    }
}

/// Outcome of a structural support check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    Supported,
    Unsupported(String),
}

impl Support {
    pub fn is_supported(&self) -> bool {
        matches!(self, Support::Supported)
    }
}

pub trait ChartGenerator {
    fn name(&self) -> &'static str;

    fn supports_data(&self) -> Support;

    /// Fails with `UnsupportedData` when `supports_data` is not `Supported`.
    fn generate(&self) -> FormatResult<Visualization>;
}

/// Run every generator that supports the record, range chart first.
pub fn generate_all(record: &ChartRecord) -> FormatResult<Vec<Visualization>> {
    let generators: [&dyn ChartGenerator; 2] = [
        &RangeChartGenerator::new(record),
        &LineChartGenerator::new(record),
    ];

    let mut out = Vec::new();
    for generator in generators {
        match generator.supports_data() {
            Support::Supported => out.push(generator.generate()?),
            Support::Unsupported(reason) => {
                tracing::trace!(generator = generator.name(), %reason, "skipping generator");
            }
        }
    }
    Ok(out)
}
