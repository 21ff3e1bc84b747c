use thiserror::Error;

/// Unified error type for the entire portfolio-pulse-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The computation pipeline itself never fails — sparse data, empty windows,
/// and inactive goals all degrade to empty or zeroed outputs. Errors are
/// reserved for caller mistakes (bad ranges) and string plumbing (parsing
/// UI selections, serializing chart output).
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── UI string plumbing ──────────────────────────────────────────
    #[error("Unknown window preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
