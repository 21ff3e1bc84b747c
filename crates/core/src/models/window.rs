use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// How densely the history is bucketed before windowing.
///
/// Weekly and monthly views exist to declutter dense daily history without
/// inventing synthetic smoothing — every displayed value is a real snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One point per day (pass-through)
    Daily,
    /// One point per ISO week (Monday start), latest snapshot wins
    Weekly,
    /// One point per calendar month, latest snapshot wins
    Monthly,
}

impl Granularity {
    /// Step size used when spacing goal-trajectory checkpoints.
    #[must_use]
    pub fn step_size_days(&self) -> i64 {
        match self {
            Granularity::Daily => 1,
            Granularity::Weekly => 7,
            Granularity::Monthly => 30,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Weekly => write!(f, "weekly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            other => Err(CoreError::UnknownGranularity(other.to_string())),
        }
    }
}

/// Named zoom presets for the chart.
///
/// Symmetric presets show an equal stretch of time before and after today:
/// `lookback_units` units of `unit_size_days` days on each side. `All`
/// disables filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPreset {
    /// ±10 days
    OneDay,
    /// ±10 weeks
    OneWeek,
    /// ±10 months (30-day months)
    OneMonth,
    /// ±10 quarters
    ThreeMonths,
    /// ±10 half-years
    SixMonths,
    /// ±10 years
    OneYear,
    /// Everything — no window filtering
    All,
}

impl WindowPreset {
    /// Every symmetric preset shows this many units on each side of today.
    const LOOKBACK_UNITS: i64 = 10;

    /// The short label shown on the preset buttons.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            WindowPreset::OneDay => "1D",
            WindowPreset::OneWeek => "1W",
            WindowPreset::OneMonth => "1M",
            WindowPreset::ThreeMonths => "3M",
            WindowPreset::SixMonths => "6M",
            WindowPreset::OneYear => "1Y",
            WindowPreset::All => "ALL",
        }
    }

    /// Number of units kept on each side of today (`All` has no bound).
    #[must_use]
    pub fn lookback_units(&self) -> Option<i64> {
        match self {
            WindowPreset::All => None,
            _ => Some(Self::LOOKBACK_UNITS),
        }
    }

    /// Size of one unit in days (`All` has no bound).
    #[must_use]
    pub fn unit_size_days(&self) -> Option<i64> {
        match self {
            WindowPreset::OneDay => Some(1),
            WindowPreset::OneWeek => Some(7),
            WindowPreset::OneMonth => Some(30),
            WindowPreset::ThreeMonths => Some(90),
            WindowPreset::SixMonths => Some(180),
            WindowPreset::OneYear => Some(365),
            WindowPreset::All => None,
        }
    }

    /// Half of the symmetric window in days, or `None` for `All`.
    #[must_use]
    pub fn half_range_days(&self) -> Option<i64> {
        Some(self.lookback_units()? * self.unit_size_days()?)
    }

    /// All presets in display order (for rendering the button row).
    #[must_use]
    pub fn all() -> [WindowPreset; 7] {
        [
            WindowPreset::OneDay,
            WindowPreset::OneWeek,
            WindowPreset::OneMonth,
            WindowPreset::ThreeMonths,
            WindowPreset::SixMonths,
            WindowPreset::OneYear,
            WindowPreset::All,
        ]
    }
}

impl std::fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WindowPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(WindowPreset::OneDay),
            "1W" => Ok(WindowPreset::OneWeek),
            "1M" => Ok(WindowPreset::OneMonth),
            "3M" => Ok(WindowPreset::ThreeMonths),
            "6M" => Ok(WindowPreset::SixMonths),
            "1Y" => Ok(WindowPreset::OneYear),
            "ALL" => Ok(WindowPreset::All),
            other => Err(CoreError::UnknownPreset(other.to_string())),
        }
    }
}

/// The user-selected time window: a named preset or an explicit date range.
///
/// Custom bounds are inclusive on both ends. `start <= end` is validated at
/// the engine facade before any filtering happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    /// One of the named zoom presets (symmetric around today, or ALL)
    Preset(WindowPreset),
    /// Explicit inclusive date range
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeWindow {
    /// Convenience constructor for the ALL preset.
    #[must_use]
    pub fn all() -> Self {
        TimeWindow::Preset(WindowPreset::All)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::all()
    }
}
