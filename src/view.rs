//! Viewer-side selection: which charts or series to show for a brain region.
//!
//! The viewer calls in with the atlas intensity under the cursor; nothing here
//! draws. What is on screen is an explicit `DisplayState` owned by the caller
//! and compared by value, so redraws happen only when the selection changes.

use crate::chart::Visualization;
use crate::chart::shape::Title;
use crate::fragment::{RegionSeries, Series};
use serde::Serialize;
use tracing::info;

/// Atlas volumes paint each region with one intensity; its floor is the region id.
pub fn region_id_from_intensity(intensity: f64) -> Option<usize> {
    if intensity.is_finite() && intensity >= 0.0 {
        Some(intensity.floor() as usize)
    } else {
        None
    }
}

/// Charts for a region id, or nothing when the preprocessor produced none.
pub fn visualizations_for_region(
    output: &[Option<Vec<Visualization>>],
    region_id: usize,
) -> &[Visualization] {
    match output.get(region_id) {
        Some(Some(charts)) => charts.as_slice(),
        _ => {
            info!(region_id, "no visualization data for region");
            &[]
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    displayed: Vec<Visualization>,
}

impl DisplayState {
    pub fn displayed(&self) -> &[Visualization] {
        &self.displayed
    }

    /// Replace the displayed charts. Returns true if a redraw is needed.
    pub fn update(&mut self, next: &[Visualization]) -> bool {
        if self.displayed == next {
            return false;
        }
        self.displayed = next.to_vec();
        true
    }
}

/// One parsed Brain Insights file and whether it contributes to the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub used: bool,
    pub regions: RegionSeries,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionChart {
    pub title: Title,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetCollection {
    datasets: Vec<Dataset>,
}

impl DatasetCollection {
    /// New datasets start out used.
    pub fn add(&mut self, name: impl Into<String>, regions: RegionSeries) {
        self.datasets.push(Dataset {
            name: name.into(),
            used: true,
            regions,
        });
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Flip the `used` flag of the named dataset; returns the new value.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let dataset = self.datasets.iter_mut().find(|d| d.name == name)?;
        dataset.used = !dataset.used;
        Some(dataset.used)
    }

    /// Series of one region from every used dataset, in dataset order.
    pub fn region_chart(&self, region: &str) -> RegionChart {
        let series = self
            .datasets
            .iter()
            .filter(|d| d.used)
            .filter_map(|d| d.regions.get(region))
            .flat_map(|r| r.series.iter().cloned())
            .collect();
        RegionChart {
            title: Title {
                text: region.to_string(),
                ..Default::default()
            },
            series,
        }
    }
}
