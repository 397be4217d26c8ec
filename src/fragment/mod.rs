//! Brain Insights Format: fragment descriptions and per-region series.
//!
//! This layer is separate from the preprocessor's chart generation. It owns:
//! - the description mini-grammar (name, kind, range bound, x)
//! - aggregation of fragments into highcharts-ready series per region

pub mod aggregate;
pub mod description;

pub use aggregate::{
    DESCRIPTION_COLUMN, Fragment, Region, RegionSeries, Series, SeriesPoint, aggregate,
    load_brain_insights, parse_brain_insights, parse_fragments,
};
pub use description::{FragmentDescription, RangeKind, SeriesKind, parse_description};
