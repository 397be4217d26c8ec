//! Error kinds raised while loading tables, parsing fragments and building charts.

use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "fragment description {description:?} must have at least three ':'-separated sections, found {found}"
    )]
    MalformedDescription { description: String, found: usize },

    #[error("unknown fragment kind {kind:?} in {description:?}, expected one of line, arearange")]
    UnknownFragmentKind { kind: String, description: String },

    #[error("unknown range kind {kind:?} in {description:?}, expected one of min, max")]
    UnknownRangeKind { kind: String, description: String },

    #[error("cannot generate {generator}: {reason}")]
    UnsupportedData {
        generator: &'static str,
        reason: String,
    },

    #[error("no rows could be parsed from the input files")]
    NoParsableRows,

    #[error("missing required column {0:?}")]
    MissingColumn(String),

    #[error("line {line}: column {column:?} holds {value:?}, expected a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("line {line}: index {value:?} is not a non-negative integer")]
    InvalidIndex { line: usize, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("chart template {name} is invalid: {reason}")]
    Template { name: &'static str, reason: String },
}
