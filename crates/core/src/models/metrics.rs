use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary-card metrics for the currently visible window.
///
/// Always fully populated — 0 is the "not applicable" sentinel for missing
/// data or an unset goal, so the widgets never have to branch on absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetrics {
    /// The live current total portfolio value
    pub portfolio_size: f64,

    /// Change since the first point of the visible window
    pub period_pnl: f64,

    /// Period P&L as a percentage of the window's first value
    pub period_pnl_pct: f64,

    /// The goal's target value (0 when no goal is set)
    pub target_value: f64,

    /// target_value - portfolio_size; positive means still short of goal
    pub delta_to_target: f64,
}

impl PeriodMetrics {
    /// Metrics for "no data and no goal" — everything zero except the
    /// portfolio size, which is always known from the live value.
    #[must_use]
    pub fn empty(portfolio_size: f64) -> Self {
        Self {
            portfolio_size,
            period_pnl: 0.0,
            period_pnl_pct: 0.0,
            target_value: 0.0,
            delta_to_target: 0.0,
        }
    }
}

/// Progress toward the user's goal, for the strategy summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The goal's target value (0 when no goal is set)
    pub target_value: f64,

    /// The goal's target date, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    /// current_value / target_value × 100 (0 when no target)
    pub progress_pct: f64,

    /// Constant annual compound growth rate needed to reach the target
    /// by the target date, as a percentage (0 when the goal is inactive)
    pub required_annual_growth_pct: f64,

    /// target_value - current_value (0 when no target)
    pub delta_to_target: f64,
}

impl GoalProgress {
    /// Progress record for an unset or inactive goal.
    #[must_use]
    pub fn none() -> Self {
        Self {
            target_value: 0.0,
            target_date: None,
            progress_pct: 0.0,
            required_annual_growth_pct: 0.0,
            delta_to_target: 0.0,
        }
    }
}
