//! Error types for the salon ecosystem.

use thiserror::Error;

use crate::validate::FieldError;

/// Errors that can occur in salon operations.
///
/// Store callers care about three shapes: `Validation` (field-scoped,
/// rendered next to the offending form inputs), `Unauthorized` (the saved
/// token is no longer accepted), and everything else (opaque, rendered as
/// a single generic notification).
#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server rejected {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Request was not authorized (401)")]
    Unauthorized,

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for salon operations.
pub type SalonResult<T> = Result<T, SalonError>;
