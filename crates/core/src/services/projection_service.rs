use chrono::{Duration, NaiveDate};
use log::debug;

use crate::models::goal::GoalSpec;
use crate::models::series::ValuePoint;
use crate::models::window::Granularity;

/// Produces the synthetic straight-line trajectory toward the user's goal.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Evenly spaced checkpoints from today to the target date.
    ///
    /// The line is a plain linear interpolation — "the value you'd need at
    /// each checkpoint to arrive exactly on target" — not a compounding
    /// market-return model. Checkpoint spacing follows the chart granularity
    /// (1 / 7 / 30 days); the final checkpoint is date-capped at the target
    /// date and lands exactly on the target value.
    ///
    /// An inactive goal (either field unset, or the target date not strictly
    /// after today) yields an empty trajectory.
    pub fn project(
        &self,
        goal: &GoalSpec,
        today: NaiveDate,
        granularity: Granularity,
    ) -> Vec<ValuePoint> {
        let (Some(target_value), Some(target_date)) = (goal.target_value, goal.target_date)
        else {
            return Vec::new();
        };
        if target_date <= today {
            debug!("goal target date {target_date} is not in the future; no trajectory");
            return Vec::new();
        }

        let step_days = granularity.step_size_days();
        let total_days = (target_date - today).num_days();
        let steps = (total_days + step_days - 1) / step_days;
        let growth_per_step = (target_value - goal.current_value) / steps as f64;

        let mut trajectory = Vec::with_capacity(steps as usize + 1);
        for i in 0..=steps {
            let date = today + Duration::days((i * step_days).min(total_days));
            let value = goal.current_value + growth_per_step * i as f64;
            trajectory.push(ValuePoint::new(date, value));
        }
        trajectory
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
