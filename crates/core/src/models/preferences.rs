use serde::{Deserialize, Serialize};

use super::window::{Granularity, TimeWindow};

/// The user's chart selection: which window and which bucketing density.
///
/// Persisting this across sessions is the caller's job — the engine only
/// ever receives it by value and never touches storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPreferences {
    /// Bucketing density for the history
    pub granularity: Granularity,

    /// The visible time window
    pub window: TimeWindow,
}

impl Default for ChartPreferences {
    fn default() -> Self {
        Self {
            granularity: Granularity::Daily,
            window: TimeWindow::all(),
        }
    }
}
