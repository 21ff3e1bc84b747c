use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-defined financial goal, loaded from the strategy configuration.
///
/// Target value and date are both optional — the user may have set neither,
/// one, or both. A projection is only produced when the goal is active
/// (see [`GoalSpec::is_active`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    /// The portfolio value the user wants to reach
    #[serde(default)]
    pub target_value: Option<f64>,

    /// The date by which the user wants to reach it
    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// The live current total portfolio value
    pub current_value: f64,
}

impl GoalSpec {
    pub fn new(
        target_value: Option<f64>,
        target_date: Option<NaiveDate>,
        current_value: f64,
    ) -> Self {
        Self {
            target_value,
            target_date,
            current_value,
        }
    }

    /// A goal with no target set — no projection, zeroed goal metrics.
    #[must_use]
    pub fn inactive(current_value: f64) -> Self {
        Self {
            target_value: None,
            target_date: None,
            current_value,
        }
    }

    /// A goal is active only when both target value and target date are set
    /// and the target date is strictly after today.
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match (self.target_value, self.target_date) {
            (Some(_), Some(date)) => date > today,
            _ => false,
        }
    }
}
