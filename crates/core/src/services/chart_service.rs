use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::chart::ChartDataPoint;
use crate::models::series::ValuePoint;

/// Merges the actual series and the goal trajectory into chart-ready points.
///
/// The core computes all the numbers — the frontend only renders. Output is
/// the sole artifact handed to the charting component: one entry per date,
/// sorted ascending, each carrying the actual value, the target value, or
/// both.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Compose the windowed actual series with the goal trajectory.
    ///
    /// Trajectory points outside `[first_actual, last_actual]` are dropped
    /// first, so the target overlay never stretches the visible x-axis
    /// beyond the actual data. `actual` and `target` stay independently
    /// optional — one is never inferred from the other.
    ///
    /// An empty actual series composes to an empty chart: with no visible
    /// range there is nothing to overlay.
    pub fn compose(&self, actual: &[ValuePoint], trajectory: &[ValuePoint]) -> Vec<ChartDataPoint> {
        let (Some(first), Some(last)) = (actual.first(), actual.last()) else {
            return Vec::new();
        };
        let visible = first.date..=last.date;

        let mut merged: BTreeMap<NaiveDate, ChartDataPoint> = BTreeMap::new();
        for point in actual {
            merged.insert(point.date, ChartDataPoint::actual(point.date, point.value));
        }
        for point in trajectory {
            if !visible.contains(&point.date) {
                continue;
            }
            merged
                .entry(point.date)
                .and_modify(|entry| entry.target = Some(point.value))
                .or_insert_with(|| ChartDataPoint::target(point.date, point.value));
        }

        merged.into_values().collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
