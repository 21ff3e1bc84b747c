use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::series::ValuePoint;
use crate::models::window::Granularity;

/// Normalizes raw valuation history and buckets it by granularity.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Deduplicate and sort a raw history, injecting today's live value.
    ///
    /// The feed may deliver points unsorted and with duplicate dates
    /// (overlapping backfills). Duplicates resolve last-write-wins by
    /// insertion order; the literal today date is then forced to the live
    /// value no matter where (or whether) it appeared in the raw history.
    ///
    /// The result is sorted ascending with unique dates and always contains
    /// a point for today — an empty feed yields a single-point series.
    pub fn normalize(
        &self,
        history: &[ValuePoint],
        live_value: f64,
        today: NaiveDate,
    ) -> Vec<ValuePoint> {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for point in history {
            by_date.insert(point.date, point.value);
        }
        by_date.insert(today, live_value);

        by_date
            .into_iter()
            .map(|(date, value)| ValuePoint::new(date, value))
            .collect()
    }

    /// Collapse a normalized series to one representative point per bucket.
    ///
    /// - `Daily`: pass-through, unchanged.
    /// - `Weekly`: buckets are ISO weeks (Monday start); the point with the
    ///   latest date in each week represents it.
    /// - `Monthly`: buckets are calendar year+month; latest date wins.
    ///
    /// Bucketing never averages — every emitted value is an actual snapshot
    /// from the input. Expects a normalized (sorted, unique-date) series.
    pub fn aggregate(&self, series: &[ValuePoint], granularity: Granularity) -> Vec<ValuePoint> {
        match granularity {
            Granularity::Daily => series.to_vec(),
            Granularity::Weekly => Self::bucket_latest(series, Self::week_monday),
            Granularity::Monthly => Self::bucket_latest(series, |d| (d.year(), d.month())),
        }
    }

    /// The Monday of the ISO week containing `date` — the week's bucket key.
    fn week_monday(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
    }

    /// Keep the last point seen per bucket key. Input is sorted ascending
    /// and both bucket keys are monotone in the date, so overwriting keeps
    /// the latest point and the output comes back out in date order.
    fn bucket_latest<K, F>(series: &[ValuePoint], key: F) -> Vec<ValuePoint>
    where
        K: Ord,
        F: Fn(NaiveDate) -> K,
    {
        let mut buckets: BTreeMap<K, ValuePoint> = BTreeMap::new();
        for point in series {
            buckets.insert(key(point.date), point.clone());
        }
        buckets.into_values().collect()
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
