//! Error types for type generation.

use thiserror::Error;

/// Boxed error returned by schema providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a generation run. Warnings never appear here; a failed
/// run produces no partial document.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The schema provider failed to deliver a snapshot.
    #[error("schema fetch failed: {0}")]
    Fetch(#[source] BoxError),
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
