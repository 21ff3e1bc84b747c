use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation of total portfolio value on a calendar day.
///
/// Produced by the historical-valuation feed, or synthesized by the
/// normalizer (today's live value) and the goal projector (trajectory
/// checkpoints). No time component — daily granularity throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ValuePoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}
