//! Brain region measurements to chart-ready JSON.
//!
//! Two independent pipelines:
//! - `preprocess`: wide per-record CSVs to line/range chart specs indexed by row
//! - `fragment`: Brain Insights Format CSVs to highcharts series per region

pub mod chart;
pub mod error;
pub mod fragment;
pub mod preprocess;
pub mod table;
pub mod telemetry;
pub mod view;

pub use error::{FormatError, FormatResult};

pub type Result<T> = anyhow::Result<T>;
