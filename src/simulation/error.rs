use thiserror::Error;

/// Validation failure for a simulation request.
///
/// This is the only caller-visible error the engine produces; the algorithms
/// themselves are total functions over validated input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// The reference string or frame count failed validation. Surfaced to the
    /// caller as-is, never retried or corrected.
    #[error("{0}")]
    InvalidInput(String),
}
