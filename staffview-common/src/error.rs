//! Common error types for StaffView

use thiserror::Error;

/// Common result type for StaffView operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across StaffView modules
#[derive(Error, Debug)]
pub enum Error {
    /// Record feed request failed (network error or non-2xx response)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Invalid user input or malformed feed record
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
