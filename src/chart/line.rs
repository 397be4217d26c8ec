use crate::chart::shape::{ChartPoint, SeriesOptions, Visualization, line_chart_template};
use crate::chart::{ChartGenerator, ChartRecord, Support};
use crate::error::{FormatError, FormatResult};
use regex::Regex;
use std::sync::LazyLock;

// Column keys look like "t0", "t1", ...: a non-digit prefix then digits.
static SERIES_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^0-9]+)[0-9]+$").expect("series key pattern is valid"));

/// Check that every column key shares one prefix followed by a number.
///
/// Example: [t0, t1, t2] is valid; [t0, u1] and [t0, total] are not. An empty
/// list is valid and charts as an empty line.
pub fn validate_series_columns(columns: &[(String, f64)]) -> Support {
    let mut prefix: Option<&str> = None;
    for (key, _) in columns {
        let Some(caps) = SERIES_KEY.captures(key) else {
            return Support::Unsupported(format!(
                "column {key:?} is not a prefix followed by a number"
            ));
        };
        let this = caps.get(1).map_or("", |m| m.as_str());
        match prefix {
            Some(p) if p != this => {
                return Support::Unsupported(format!(
                    "column {key:?} has prefix {this:?}, expected {p:?}"
                ));
            }
            _ => prefix = Some(this),
        }
    }
    Support::Supported
}

/// Plots the raw column values against their ordinal position.
#[derive(Debug)]
pub struct LineChartGenerator<'a> {
    record: &'a ChartRecord,
}

impl<'a> LineChartGenerator<'a> {
    pub fn new(record: &'a ChartRecord) -> Self {
        Self { record }
    }
}

impl ChartGenerator for LineChartGenerator<'_> {
    fn name(&self) -> &'static str {
        "LineChartGenerator"
    }

    fn supports_data(&self) -> Support {
        if self.record.label.is_none() {
            return Support::Unsupported("record has no label".to_string());
        }
        validate_series_columns(&self.record.columns)
    }

    fn generate(&self) -> FormatResult<Visualization> {
        if let Support::Unsupported(reason) = self.supports_data() {
            return Err(FormatError::UnsupportedData {
                generator: self.name(),
                reason,
            });
        }

        let label = self.record.label.as_deref().unwrap_or_default();
        let mut chart = line_chart_template()?;
        chart.data.title.text = format!("Line chart for region {label}");
        chart.data.x_axis.categories = Some(
            self.record
                .columns
                .iter()
                .map(|(key, _)| key.clone())
                .collect(),
        );
        chart.data.series = vec![SeriesOptions {
            name: "Data".to_string(),
            data: self
                .record
                .columns
                .iter()
                .map(|(_, v)| ChartPoint::Value(*v))
                .collect(),
            ..Default::default()
        }];
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(label: Option<&str>, cols: &[(&str, f64)]) -> ChartRecord {
        ChartRecord::new(
            label.map(str::to_string),
            cols.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        )
    }

    #[test]
    fn shared_prefix_is_supported() {
        let r = record(Some("A"), &[("t0", 1.0), ("t1", 2.0), ("t2", 3.0)]);
        assert_eq!(LineChartGenerator::new(&r).supports_data(), Support::Supported);
    }

    #[test]
    fn mixed_prefixes_are_unsupported() {
        let r = record(Some("A"), &[("t0", 1.0), ("u1", 2.0)]);
        let support = LineChartGenerator::new(&r).supports_data();
        assert!(!support.is_supported());
    }

    #[test]
    fn key_without_number_is_unsupported() {
        let support = validate_series_columns(&[("t0".into(), 1.0), ("total".into(), 2.0)]);
        assert!(matches!(support, Support::Unsupported(ref reason) if reason.contains("total")));
    }

    #[test]
    fn range_layout_is_not_a_line() {
        let r = record(
            Some("A"),
            &[("avg_t0", 1.0), ("min_t0", 0.0), ("max_t0", 2.0)],
        );
        assert!(!LineChartGenerator::new(&r).supports_data().is_supported());
    }

    #[test]
    fn missing_label_is_unsupported() {
        let no_label = record(None, &[("t0", 1.0)]);
        assert!(!LineChartGenerator::new(&no_label).supports_data().is_supported());
    }

    #[test]
    fn labelled_record_without_columns_is_an_empty_line() {
        let no_columns = record(Some("A"), &[]);
        let generator = LineChartGenerator::new(&no_columns);
        assert_eq!(generator.supports_data(), Support::Supported);
        let chart = generator.generate().unwrap();
        assert_eq!(chart.data.x_axis.categories, Some(vec![]));
        assert_eq!(chart.data.series.len(), 1);
        assert!(chart.data.series[0].data.is_empty());
    }

    #[test]
    fn generate_fills_title_categories_and_values() {
        let r = record(Some("Left hippocampus"), &[("t0", 1.0), ("t1", 2.0)]);
        let chart = LineChartGenerator::new(&r).generate().unwrap();
        assert_eq!(chart.data.title.text, "Line chart for region Left hippocampus");
        assert_eq!(
            chart.data.x_axis.categories,
            Some(vec!["t0".to_string(), "t1".to_string()])
        );
        assert_eq!(chart.data.series.len(), 1);
        assert_eq!(
            chart.data.series[0].data,
            vec![ChartPoint::Value(1.0), ChartPoint::Value(2.0)]
        );
    }

    #[test]
    fn generate_rejects_unsupported_records() {
        let r = record(Some("A"), &[("t0", 1.0), ("u1", 2.0)]);
        let err = LineChartGenerator::new(&r).generate().unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedData { generator: "LineChartGenerator", .. }
        ));
    }
}
