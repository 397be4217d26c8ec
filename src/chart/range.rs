use crate::chart::shape::{ChartPoint, Visualization, range_chart_template};
use crate::chart::{ChartGenerator, ChartRecord, Support};
use crate::error::{FormatError, FormatResult};

/// Column values grouped by their `avg_` / `min_` / `max_` prefix.
#[derive(Debug, Default, PartialEq)]
struct Triplets {
    avgs: Vec<f64>,
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl Triplets {
    fn collect(columns: &[(String, f64)]) -> Self {
        let mut out = Triplets::default();
        for (key, value) in columns {
            if key.starts_with("avg_") {
                out.avgs.push(*value);
            } else if key.starts_with("min_") {
                out.mins.push(*value);
            } else if key.starts_with("max_") {
                out.maxs.push(*value);
            }
        }
        out
    }
}

/// Plots averages as a line with a (min, max) band behind it.
///
/// Band points are matched to averages by ordinal position within each
/// prefix group, not by the suffix after the prefix: `avg_t1` pairs with the
/// second `min_` and `max_` columns, whatever they are named.
#[derive(Debug)]
pub struct RangeChartGenerator<'a> {
    record: &'a ChartRecord,
}

impl<'a> RangeChartGenerator<'a> {
    pub fn new(record: &'a ChartRecord) -> Self {
        Self { record }
    }
}

impl ChartGenerator for RangeChartGenerator<'_> {
    fn name(&self) -> &'static str {
        "RangeChartGenerator"
    }

    fn supports_data(&self) -> Support {
        let Triplets { avgs, mins, maxs } = Triplets::collect(&self.record.columns);
        if avgs.is_empty() || mins.is_empty() || maxs.is_empty() {
            return Support::Unsupported(
                "needs at least one avg_, min_ and max_ column".to_string(),
            );
        }
        if avgs.len() != mins.len() || mins.len() != maxs.len() {
            return Support::Unsupported(format!(
                "mismatched counts: {} avg_, {} min_, {} max_",
                avgs.len(),
                mins.len(),
                maxs.len()
            ));
        }
        Support::Supported
    }

    fn generate(&self) -> FormatResult<Visualization> {
        if let Support::Unsupported(reason) = self.supports_data() {
            return Err(FormatError::UnsupportedData {
                generator: self.name(),
                reason,
            });
        }

        let Triplets { avgs, mins, maxs } = Triplets::collect(&self.record.columns);
        let label = self.record.label.as_deref().unwrap_or_default();

        let mut chart = range_chart_template()?;
        chart.data.title.text = format!("Line chart with min/max for region {label}");
        chart.data.series[0].data = avgs
            .iter()
            .enumerate()
            .map(|(i, avg)| ChartPoint::Pair(i, *avg))
            .collect();
        chart.data.series[1].data = mins
            .iter()
            .zip(&maxs)
            .enumerate()
            .map(|(i, (min, max))| ChartPoint::Band(i, *min, *max))
            .collect();
        Ok(chart)
    }
}
