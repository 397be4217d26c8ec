//! Fragment descriptions: the first column of a Brain Insights Format row.
//!
//! Grammar (colon-delimited):
//!   <seriesName>:<series|line>:<xValue>
//!   <seriesName>:<range|arearange>:<min|max>:<xValue>
//!
//! Example: "Volume-age:range:min:10" => arearange point, min slot, x = 10.

use crate::error::{FormatError, FormatResult};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::warn;

// Longest numeric prefix: "10y" reads as 10, "0x10" as 0, "Infinity" as inf.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeriesKind {
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "arearange")]
    AreaRange,
}

impl SeriesKind {
    /// Accepts the canonical names and their aliases ("series", "range").
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "line" | "series" => Some(SeriesKind::Line),
            "arearange" | "range" => Some(SeriesKind::AreaRange),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKind::Line => "line",
            SeriesKind::AreaRange => "arearange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDescription {
    pub series_name: String,
    pub kind: SeriesKind,
    /// Set iff `kind` is `AreaRange`.
    pub range: Option<RangeKind>,
    /// Longest numeric prefix of the x token; a positive NaN when there is none.
    pub x: f64,
}

pub fn parse_description(description: &str) -> FormatResult<FragmentDescription> {
    let tokens: Vec<&str> = description.split(':').collect();
    if tokens.len() < 3 {
        return Err(FormatError::MalformedDescription {
            description: description.to_string(),
            found: tokens.len(),
        });
    }

    let kind = SeriesKind::from_token(tokens[1]).ok_or_else(|| {
        FormatError::UnknownFragmentKind {
            kind: tokens[1].to_string(),
            description: description.to_string(),
        }
    })?;

    let (range, x_token) = match kind {
        SeriesKind::Line => (None, tokens.get(2)),
        SeriesKind::AreaRange => {
            let range = match tokens[2] {
                "min" => RangeKind::Min,
                "max" => RangeKind::Max,
                other => {
                    return Err(FormatError::UnknownRangeKind {
                        kind: other.to_string(),
                        description: description.to_string(),
                    });
                }
            };
            (Some(range), tokens.get(3))
        }
    };

    let x = parse_x(x_token.copied());
    if x.is_nan() {
        warn!(description, "fragment x-value is not a number, keeping NaN");
    }

    Ok(FragmentDescription {
        series_name: tokens[0].to_string(),
        kind,
        range,
        x,
    })
}

/// Lenient float parse over the longest numeric prefix. Anything else,
/// including "inf" and "nan" spellings, becomes `f64::NAN` so it sorts last.
fn parse_x(token: Option<&str>) -> f64 {
    token
        .and_then(|t| NUMERIC_PREFIX.find(t.trim_start()))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|x| !x.is_nan())
        .unwrap_or(f64::NAN)
}
