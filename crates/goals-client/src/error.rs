//! Error types for the goals client crate.

use thiserror::Error;

/// Result type alias for goals client operations.
pub type Result<T> = std::result::Result<T, GoalClientError>;

/// Message used when a request never got an answer.
pub const NO_RESPONSE_MESSAGE: &str = "No response from server";

/// Errors that can occur while talking to the goals API.
///
/// `Display` yields the message shown to users; the variant records which of
/// the three failure causes produced it.
#[derive(Debug, Error)]
pub enum GoalClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request got no answer (connection refused or dropped, timeout).
    #[error("{}", NO_RESPONSE_MESSAGE)]
    NoResponse,

    /// The request could not be built or sent, or the response body could
    /// not be read.
    #[error("{0}")]
    Request(String),
}

impl GoalClientError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a local request error
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// HTTP status of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GoalClientError {
    fn from(err: reqwest::Error) -> Self {
        // Sent but never answered, including connections the server dropped.
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::NoResponse
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GoalClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Request(format!("Failed to encode or decode JSON: {}", err))
    }
}

/// Collapses the failure taxonomy into the single remote error kind that
/// controllers handle.
impl From<GoalClientError> for team_tracker_core::Error {
    fn from(err: GoalClientError) -> Self {
        team_tracker_core::Error::Remote(err.to_string())
    }
}
