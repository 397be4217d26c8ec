use crate::error::{FormatError, FormatResult};
use std::fmt;

/// A single CSV cell after numeric auto-detection.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Present in the header but blank in this record.
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Numbers win when the trimmed text parses as a finite float; everything
    /// else (including "NaN" and "inf") stays text.
    pub fn detect(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// One CSV record. Cells keep header order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line in the source file.
    pub line: usize,
    pub cells: Vec<(String, Cell)>,
}

/// All records of one or more CSV files, in file order.
pub type Table = Vec<Row>;

impl Row {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    /// Cell rendered as text, whatever its detected type. A blank cell is `""`.
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).map(|cell| cell.to_string())
    }

    pub fn number(&self, column: &str) -> FormatResult<Option<f64>> {
        match self.get(column) {
            None | Some(Cell::Empty) => Ok(None),
            Some(Cell::Number(v)) => Ok(Some(*v)),
            Some(Cell::Text(s)) => Err(FormatError::InvalidNumber {
                line: self.line,
                column: column.to_string(),
                value: s.clone(),
            }),
        }
    }

    /// Every numeric cell except the named columns, in header order. Blank
    /// cells are skipped, so a sparse column is absent from that record.
    pub fn numbers_except(&self, skip: &[&str]) -> FormatResult<Vec<(String, f64)>> {
        let mut out = Vec::with_capacity(self.cells.len());
        for (name, cell) in &self.cells {
            if skip.contains(&name.as_str()) {
                continue;
            }
            match cell {
                Cell::Empty => {}
                Cell::Number(v) => out.push((name.clone(), *v)),
                Cell::Text(s) => {
                    return Err(FormatError::InvalidNumber {
                        line: self.line,
                        column: name.clone(),
                        value: s.clone(),
                    });
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[(&str, Cell)]) -> Row {
        Row {
            line: 2,
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn detects_numbers_and_keeps_words_as_text() {
        assert_eq!(Cell::detect("12.5"), Cell::Number(12.5));
        assert_eq!(Cell::detect("-3"), Cell::Number(-3.0));
        assert_eq!(Cell::detect("Left hippocampus"), Cell::Text("Left hippocampus".into()));
        assert_eq!(Cell::detect("NaN"), Cell::Text("NaN".into()));
        assert_eq!(Cell::detect("inf"), Cell::Text("inf".into()));
        assert_eq!(Cell::detect(""), Cell::Empty);
    }

    #[test]
    fn numeric_label_renders_without_fraction() {
        let r = row(&[("Label", Cell::Number(3.0))]);
        assert_eq!(r.text("Label"), Some("3".to_string()));
    }

    #[test]
    fn numbers_except_skips_named_columns() {
        let r = row(&[
            ("index", Cell::Number(0.0)),
            ("Label", Cell::Text("A".into())),
            ("t0", Cell::Number(1.0)),
            ("t1", Cell::Number(2.0)),
        ]);
        let cols = r.numbers_except(&["index", "Label"]).unwrap();
        assert_eq!(cols, vec![("t0".to_string(), 1.0), ("t1".to_string(), 2.0)]);
    }

    #[test]
    fn blank_cells_read_as_empty_text_and_no_number() {
        let r = row(&[
            ("Label", Cell::Empty),
            ("t0", Cell::Number(1.0)),
            ("t1", Cell::Empty),
        ]);
        assert_eq!(r.text("Label"), Some(String::new()));
        assert_eq!(r.number("t1").unwrap(), None);
        assert_eq!(
            r.numbers_except(&["Label"]).unwrap(),
            vec![("t0".to_string(), 1.0)]
        );
    }

    #[test]
    fn text_in_data_column_is_rejected() {
        let r = row(&[("t0", Cell::Text("high".into()))]);
        let err = r.numbers_except(&[]).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidNumber { line: 2, ref column, .. } if column == "t0"
        ));
    }
}
