//! Series aggregation: fold fragments into per-region chart series.
//!
//! Input (one fragment per CSV row):
//!
//!   fragment_description    | Left hippocampus | Right hippocampus
//!   Volume-age:series:10    | 9.2              |
//!   Volume-age:range:min:10 | 2                |
//!   Volume-age:range:max:10 | 15               |
//!
//! Output (JSON):
//! {
//!   "Left hippocampus": {
//!     "series": [
//!       { "name": "Volume-age", "type": "line",      "data": [[10, 9.2]] },
//!       { "name": "Volume-age", "type": "arearange", "data": [[10, 2, 15]] }
//!     ]
//!   }
//! }

use crate::error::{FormatError, FormatResult};
use crate::fragment::description::{
    FragmentDescription, RangeKind, SeriesKind, parse_description,
};
use crate::table::{Row, Table, parse_csv_file, parse_csv_str};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::path::Path;
use tracing::debug;

pub const DESCRIPTION_COLUMN: &str = "fragment_description";

/// One parsed row: its description plus a y-value per region.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub description: FragmentDescription,
    pub values: Vec<(String, f64)>,
}

impl Fragment {
    pub fn from_row(row: &Row) -> FormatResult<Self> {
        let text = row
            .text(DESCRIPTION_COLUMN)
            .ok_or_else(|| FormatError::MissingColumn(DESCRIPTION_COLUMN.to_string()))?;
        Ok(Fragment {
            description: parse_description(&text)?,
            values: row.numbers_except(&[DESCRIPTION_COLUMN])?,
        })
    }
}

/// A data point. Slots not yet seen in the fragment stream stay `None` and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesPoint {
    Line {
        x: f64,
        y: Option<f64>,
    },
    Range {
        x: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl SeriesPoint {
    fn empty(kind: SeriesKind, x: f64) -> Self {
        match kind {
            SeriesKind::Line => SeriesPoint::Line { x, y: None },
            SeriesKind::AreaRange => SeriesPoint::Range {
                x,
                min: None,
                max: None,
            },
        }
    }

    pub fn x(&self) -> f64 {
        match self {
            SeriesPoint::Line { x, .. } | SeriesPoint::Range { x, .. } => *x,
        }
    }

    /// True once every slot of the point has a value.
    pub fn is_complete(&self) -> bool {
        match self {
            SeriesPoint::Line { y, .. } => y.is_some(),
            SeriesPoint::Range { min, max, .. } => min.is_some() && max.is_some(),
        }
    }

    fn set(&mut self, range: Option<RangeKind>, value: f64) {
        match (self, range) {
            (SeriesPoint::Line { y, .. }, _) => *y = Some(value),
            (SeriesPoint::Range { min, .. }, Some(RangeKind::Min)) => *min = Some(value),
            (SeriesPoint::Range { max, .. }, _) => *max = Some(value),
        }
    }
}

impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeriesPoint::Line { x, y } => (x, y).serialize(serializer),
            SeriesPoint::Range { x, min, max } => (x, min, max).serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Region {
    pub series: Vec<Series>,
}

/// Region name -> series, in first-seen order.
pub type RegionSeries = IndexMap<String, Region>;

/// Fold fragments into per-region series, then sort every series by x.
pub fn aggregate(fragments: &[Fragment]) -> RegionSeries {
    let mut regions = RegionSeries::new();

    for fragment in fragments {
        let d = &fragment.description;
        for (region_name, y) in &fragment.values {
            let region = regions.entry(region_name.clone()).or_default();

            let pos = region
                .series
                .iter()
                .position(|s| s.name == d.series_name && s.kind == d.kind);
            let i = pos.unwrap_or_else(|| {
                region.series.push(Series {
                    name: d.series_name.clone(),
                    kind: d.kind,
                    data: Vec::new(),
                });
                region.series.len() - 1
            });
            let series = &mut region.series[i];

            // NaN never equals itself, so each NaN fragment gets its own point.
            let pos = series.data.iter().position(|p| p.x() == d.x);
            let i = pos.unwrap_or_else(|| {
                series.data.push(SeriesPoint::empty(d.kind, d.x));
                series.data.len() - 1
            });
            series.data[i].set(d.range, *y);
        }
    }

    for region in regions.values_mut() {
        for series in &mut region.series {
            series.data.sort_by(|a, b| a.x().total_cmp(&b.x()));
        }
    }

    regions
}

pub fn parse_fragments(table: &Table) -> FormatResult<Vec<Fragment>> {
    table.iter().map(Fragment::from_row).collect()
}

/// CSV text in Brain Insights Format -> per-region series.
pub fn parse_brain_insights(text: &str) -> FormatResult<RegionSeries> {
    let table = parse_csv_str(text)?;
    let fragments = parse_fragments(&table)?;
    let regions = aggregate(&fragments);
    debug!(
        fragments = fragments.len(),
        regions = regions.len(),
        "aggregated brain insights fragments"
    );
    Ok(regions)
}

pub fn load_brain_insights(path: &Path) -> anyhow::Result<RegionSeries> {
    let table = parse_csv_file(path)?;
    let fragments = parse_fragments(&table)
        .with_context(|| format!("parse fragments in {}", path.display()))?;
    Ok(aggregate(&fragments))
}
