pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    chart::{ChartDataPoint, DashboardData},
    goal::GoalSpec,
    metrics::{GoalProgress, PeriodMetrics},
    preferences::ChartPreferences,
    series::ValuePoint,
    window::{Granularity, TimeWindow},
};
use services::{
    chart_service::ChartService, metrics_service::MetricsService,
    projection_service::ProjectionService, series_service::SeriesService,
    window_service::WindowService,
};

use errors::CoreError;

/// Maximum custom chart date range in days (10 years).
const MAX_CHART_RANGE_DAYS: i64 = 3650;

/// Main entry point for the Portfolio Pulse core library.
///
/// A pure, synchronous computation pipeline: every call takes explicit
/// inputs (history feed, live value, window, granularity, goal) and returns
/// a freshly computed output. The engine carries no state between calls —
/// memoizing on the input tuple is the caller's job, and thread safety
/// falls out of statelessness.
#[must_use]
pub struct TimelineEngine {
    series_service: SeriesService,
    window_service: WindowService,
    projection_service: ProjectionService,
    chart_service: ChartService,
    metrics_service: MetricsService,
}

impl TimelineEngine {
    pub fn new() -> Self {
        Self {
            series_service: SeriesService::new(),
            window_service: WindowService::new(),
            projection_service: ProjectionService::new(),
            chart_service: ChartService::new(),
            metrics_service: MetricsService::new(),
        }
    }

    // ── Chart ───────────────────────────────────────────────────────

    /// Build the chart sequence for the given selection.
    ///
    /// Runs the full pipeline: normalize (dedup + live-value injection),
    /// bucket by granularity, window, project the goal, and compose the
    /// actual/target overlay. The goal's `current_value` is superseded by
    /// `live_value` so both line series agree on today's number.
    pub fn chart_data(
        &self,
        history: &[ValuePoint],
        live_value: f64,
        today: NaiveDate,
        window: &TimeWindow,
        granularity: Granularity,
        goal: &GoalSpec,
    ) -> Result<Vec<ChartDataPoint>, CoreError> {
        self.validate(live_value, window)?;
        let windowed = self.windowed_series(history, live_value, today, window, granularity);
        let goal = Self::effective_goal(goal, live_value);
        let trajectory = self.projection_service.project(&goal, today, granularity);
        Ok(self.chart_service.compose(&windowed, &trajectory))
    }

    // ── Metrics ─────────────────────────────────────────────────────

    /// Summary-card metrics for the given selection.
    ///
    /// Uses the windowed actual series (pre-goal-overlay); an empty window
    /// degrades to zeroed P&L rather than an error.
    pub fn period_metrics(
        &self,
        history: &[ValuePoint],
        live_value: f64,
        today: NaiveDate,
        window: &TimeWindow,
        granularity: Granularity,
        goal: &GoalSpec,
    ) -> Result<PeriodMetrics, CoreError> {
        self.validate(live_value, window)?;
        let windowed = self.windowed_series(history, live_value, today, window, granularity);
        let goal = Self::effective_goal(goal, live_value);
        Ok(self
            .metrics_service
            .period_metrics(&windowed, live_value, &goal))
    }

    /// Progress toward the goal (independent of the visible window).
    #[must_use]
    pub fn goal_progress(&self, goal: &GoalSpec, today: NaiveDate) -> GoalProgress {
        self.metrics_service.goal_progress(goal, today)
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Compute everything the dashboard renders, sharing one pipeline pass.
    pub fn dashboard(
        &self,
        history: &[ValuePoint],
        live_value: f64,
        today: NaiveDate,
        preferences: &ChartPreferences,
        goal: &GoalSpec,
    ) -> Result<DashboardData, CoreError> {
        self.validate(live_value, &preferences.window)?;
        let windowed = self.windowed_series(
            history,
            live_value,
            today,
            &preferences.window,
            preferences.granularity,
        );
        let goal = Self::effective_goal(goal, live_value);
        let trajectory = self
            .projection_service
            .project(&goal, today, preferences.granularity);

        Ok(DashboardData {
            chart: self.chart_service.compose(&windowed, &trajectory),
            metrics: self
                .metrics_service
                .period_metrics(&windowed, live_value, &goal),
            goal: self.metrics_service.goal_progress(&goal, today),
        })
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export chart points as a pretty-printed JSON string.
    pub fn chart_to_json(points: &[ChartDataPoint]) -> Result<String, CoreError> {
        serde_json::to_string_pretty(points)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart data: {e}")))
    }

    /// Export chart points as a CSV string.
    /// Columns: date, actual, target — absent values become empty cells.
    #[must_use]
    pub fn chart_to_csv(points: &[ChartDataPoint]) -> String {
        let mut csv = String::from("date,actual,target\n");
        for point in points {
            let actual = point.actual.map(|v| v.to_string()).unwrap_or_default();
            let target = point.target.map(|v| v.to_string()).unwrap_or_default();
            csv.push_str(&format!("{},{},{}\n", point.date, actual, target));
        }
        csv
    }

    // ── Internal ────────────────────────────────────────────────────

    /// The shared normalize → aggregate → window pipeline.
    fn windowed_series(
        &self,
        history: &[ValuePoint],
        live_value: f64,
        today: NaiveDate,
        window: &TimeWindow,
        granularity: Granularity,
    ) -> Vec<ValuePoint> {
        let normalized = self.series_service.normalize(history, live_value, today);
        let aggregated = self.series_service.aggregate(&normalized, granularity);
        self.window_service.select(&aggregated, window, today)
    }

    /// The stored strategy's `current_value` can lag behind the live feed;
    /// the live value always wins.
    fn effective_goal(goal: &GoalSpec, live_value: f64) -> GoalSpec {
        GoalSpec {
            current_value: live_value,
            ..goal.clone()
        }
    }

    fn validate(&self, live_value: f64, window: &TimeWindow) -> Result<(), CoreError> {
        if live_value < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Live portfolio value must be non-negative, got {live_value}"
            )));
        }
        if let TimeWindow::Custom { start, end } = window {
            if start > end {
                return Err(CoreError::ValidationError(format!(
                    "'start' date ({start}) must not be after 'end' date ({end})"
                )));
            }
            let range_days = (*end - *start).num_days();
            if range_days > MAX_CHART_RANGE_DAYS {
                return Err(CoreError::ValidationError(format!(
                    "Chart range of {range_days} days exceeds maximum of {MAX_CHART_RANGE_DAYS} days (10 years)"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new()
    }
}
