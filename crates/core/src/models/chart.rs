use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::metrics::{GoalProgress, PeriodMetrics};

/// A single data point for portfolio chart rendering.
///
/// The core computes all the numbers — the frontend only renders. A date may
/// carry the actual (historical) value, the goal-trajectory target value, or
/// both; the two line series are mapped off these fields by name, so absent
/// fields are omitted from the JSON rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// The date for this data point
    pub date: NaiveDate,

    /// Observed portfolio value on this date, if there was a snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,

    /// Goal-trajectory value on this date, if a goal overlay is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl ChartDataPoint {
    /// A point carrying only an observed value.
    #[must_use]
    pub fn actual(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            actual: Some(value),
            target: None,
        }
    }

    /// A point carrying only a goal-trajectory value.
    #[must_use]
    pub fn target(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            actual: None,
            target: Some(value),
        }
    }
}

/// Everything the dashboard needs for one render, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// The composed chart sequence (actual + target overlay)
    pub chart: Vec<ChartDataPoint>,

    /// Summary-card metrics for the visible window
    pub metrics: PeriodMetrics,

    /// Goal progress for the strategy card
    pub goal: GoalProgress,
}
