//! Visualization shapes (highcharts options) and their JSON templates.
//!
//! Only the fields the generators fill are typed; every other option in a
//! template is carried through `extra` untouched.

use crate::error::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const LINE_CHART_TEMPLATE: &str = include_str!("shapes/line-chart.json");
const RANGE_CHART_TEMPLATE: &str = include_str!("shapes/range-chart.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    /// Renderer selector; always "highcharts" for the bundled shapes.
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default)]
    pub title: Title,
    #[serde(default)]
    pub x_axis: XAxis,
    #[serde(default)]
    pub y_axis: YAxis,
    #[serde(default)]
    pub series: Vec<SeriesOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    /// Stamped by the preprocessor so every chart shares one scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesOptions {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Vec<ChartPoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Highcharts accepts bare y-values, `[x, y]` pairs and `[x, low, high]` bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartPoint {
    Value(f64),
    Pair(usize, f64),
    Band(usize, f64, f64),
}

fn load(name: &'static str, source: &str) -> FormatResult<Visualization> {
    serde_json::from_str(source).map_err(|e| FormatError::Template {
        name,
        reason: e.to_string(),
    })
}

/// A fresh copy of the line chart template.
pub fn line_chart_template() -> FormatResult<Visualization> {
    load("line-chart", LINE_CHART_TEMPLATE)
}

/// A fresh copy of the range chart template (average series + band series).
pub fn range_chart_template() -> FormatResult<Visualization> {
    let shape = load("range-chart", RANGE_CHART_TEMPLATE)?;
    if shape.data.series.len() < 2 {
        return Err(FormatError::Template {
            name: "range-chart",
            reason: "expected an average series and a band series".to_string(),
        });
    }
    Ok(shape)
}
