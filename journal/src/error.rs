//! Journal error handling

use thiserror::Error;

/// Errors reported by journal operations
///
/// The insight builders themselves never fail; errors arise only from
/// rejected input or an unusable window request.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}
