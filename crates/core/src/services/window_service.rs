use chrono::{Duration, NaiveDate};
use log::debug;

use crate::models::series::ValuePoint;
use crate::models::window::TimeWindow;

/// Filters an aggregated series to the user-selected time window.
pub struct WindowService;

impl WindowService {
    pub fn new() -> Self {
        Self
    }

    /// Keep the points inside the window, order preserved.
    ///
    /// - `ALL` preset: the full series, unfiltered.
    /// - Symmetric preset: equal stretch before and after today —
    ///   `today - half <= date <= today + half` where `half` is the preset's
    ///   lookback units × unit size.
    /// - Custom range: `start <= date <= end`, both ends inclusive.
    ///
    /// An empty result is a valid outcome (the caller renders an empty
    /// state); this never fails.
    pub fn select(
        &self,
        series: &[ValuePoint],
        window: &TimeWindow,
        today: NaiveDate,
    ) -> Vec<ValuePoint> {
        let (start, end) = match window {
            TimeWindow::Preset(preset) => match preset.half_range_days() {
                None => return series.to_vec(),
                Some(half) => (today - Duration::days(half), today + Duration::days(half)),
            },
            TimeWindow::Custom { start, end } => (*start, *end),
        };

        let kept: Vec<ValuePoint> = series
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .cloned()
            .collect();

        if kept.is_empty() && !series.is_empty() {
            debug!("window [{start}..{end}] selected no points from {} available", series.len());
        }

        kept
    }
}

impl Default for WindowService {
    fn default() -> Self {
        Self::new()
    }
}
