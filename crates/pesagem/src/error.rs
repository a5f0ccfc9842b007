//! Error types for the pesagem library.

use thiserror::Error;

/// Main error type for import operations.
///
/// Per-line failures are data, not errors: they land in the
/// [`BatchResult`](crate::BatchResult) error bucket. Only conditions that
/// prevent a batch from being processed at all surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Blank or whitespace-only submission, rejected before any per-line work.
    #[error("empty submission: nothing to import")]
    EmptySubmission,
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
