//! CSV loading into header-ordered rows of auto-detected cells.

pub mod parse;
pub mod row;

pub use parse::{parse_csv_file, parse_csv_str};
pub use row::{Cell, Row, Table};
