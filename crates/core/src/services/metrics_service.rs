use chrono::NaiveDate;
use log::debug;

use crate::models::goal::GoalSpec;
use crate::models::metrics::{GoalProgress, PeriodMetrics};
use crate::models::series::ValuePoint;

/// Days per year for annualized-growth math (accounts for leap years).
const DAYS_PER_YEAR: f64 = 365.25;

/// Computes the summary-card numbers: period P&L and goal progress.
///
/// Every percentage checks its denominator and substitutes 0 rather than
/// propagating NaN or infinity.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for the currently visible window.
    ///
    /// Period P&L compares the live value against the first point of the
    /// windowed series (pre-goal-overlay). An empty window means "no data
    /// for period": both P&L fields are 0. Goal fields degrade to 0 when no
    /// target is set.
    pub fn period_metrics(
        &self,
        windowed: &[ValuePoint],
        current_value: f64,
        goal: &GoalSpec,
    ) -> PeriodMetrics {
        let (period_pnl, period_pnl_pct) = match windowed.first() {
            Some(first) => {
                let pnl = current_value - first.value;
                let pct = if first.value > 0.0 {
                    pnl / first.value * 100.0
                } else {
                    0.0
                };
                (pnl, pct)
            }
            None => {
                debug!("empty window — period P&L reported as 0");
                (0.0, 0.0)
            }
        };

        let target_value = goal.target_value.unwrap_or(0.0);
        let delta_to_target = if goal.target_value.is_some() {
            target_value - current_value
        } else {
            0.0
        };

        PeriodMetrics {
            portfolio_size: current_value,
            period_pnl,
            period_pnl_pct,
            target_value,
            delta_to_target,
        }
    }

    /// Progress toward the goal, independent of the visible window.
    ///
    /// `required_annual_growth_pct` is the constant compound rate that takes
    /// the current value to the target by the target date. Horizons under a
    /// year report the plain required growth un-annualized; degenerate
    /// inputs (inactive goal, non-positive values) report 0.
    pub fn goal_progress(&self, goal: &GoalSpec, today: NaiveDate) -> GoalProgress {
        let target_value = goal.target_value.unwrap_or(0.0);
        let delta_to_target = if goal.target_value.is_some() {
            target_value - goal.current_value
        } else {
            0.0
        };
        let progress_pct = if target_value > 0.0 {
            goal.current_value / target_value * 100.0
        } else {
            0.0
        };

        GoalProgress {
            target_value,
            target_date: goal.target_date,
            progress_pct,
            required_annual_growth_pct: Self::required_annual_growth(goal, today),
            delta_to_target,
        }
    }

    fn required_annual_growth(goal: &GoalSpec, today: NaiveDate) -> f64 {
        let (Some(target_value), Some(target_date)) = (goal.target_value, goal.target_date)
        else {
            return 0.0;
        };
        if target_value <= 0.0 || goal.current_value <= 0.0 {
            return 0.0;
        }
        let days = (target_date - today).num_days();
        if days <= 0 {
            return 0.0;
        }

        let total_growth = target_value / goal.current_value - 1.0;
        let years = days as f64 / DAYS_PER_YEAR;
        if years < 1.0 {
            // sub-year horizon: total required growth, un-annualized
            return total_growth * 100.0;
        }
        ((1.0 + total_growth).powf(1.0 / years) - 1.0) * 100.0
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
