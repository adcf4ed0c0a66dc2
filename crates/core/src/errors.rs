//! Core error types for Team Tracker.
//!
//! Transport failures of any kind
//! are collapsed into [`Error::Remote`] by the client crate so controllers see
//! a single remote error kind carrying a readable message.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for goal tracking.
#[derive(Error, Debug)]
pub enum Error {
    /// A remote call failed. The message is already human-readable.
    #[error("{0}")]
    Remote(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal not found: {0}")]
    NotFound(String),

    /// An operation was attempted in a state that does not allow it
    /// (e.g. editing a closed form).
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Create a remote error from any displayable message
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
