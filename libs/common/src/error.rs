//! Custom error types for the common library
//!
//! This module defines the two failure classes every client operation can
//! produce: validation failures, raised before any I/O, and request failures,
//! raised by the network round trip or the local session store.

use thiserror::Error;

/// Error raised by a key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold a JSON object of strings
    #[error("Storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// A form field failed pre-flight validation.
///
/// The message is user-facing and is shown verbatim in a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human readable message
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error raised by a request to the backend
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never produced a response (DNS, TLS, connection reset)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a failure, either a non-2xx status or an
    /// `{ok: false}` body
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `error` string from the response body, if any
        message: Option<String>,
    },

    /// The response body was not valid JSON for the expected type
    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// A request URL could not be built from the base URL and path
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The response was JSON but did not have the expected shape
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    /// The session store could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RequestError {
    /// Classify a reqwest error: body decoding failures are kept apart from
    /// transport failures
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err)
        } else {
            RequestError::Transport(err)
        }
    }

    /// Whether the backend was never reached or answered with garbage
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, RequestError::Transport(_) | RequestError::Decode(_))
    }

    /// Message supplied by the backend, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// The server message when present, otherwise `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Type alias for Result with RequestError
pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_with_message_prefers_server_text() {
        let err = RequestError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.message_or("Login failed"), "Invalid credentials");
        assert!(!err.is_connection_failure());
    }

    #[test]
    fn blank_server_message_falls_back() {
        let err = RequestError::Rejected {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(err.message_or("Update failed"), "Update failed");

        let err = RequestError::UnexpectedBody("object".to_string());
        assert_eq!(err.message_or("Update failed"), "Update failed");
    }

    #[test]
    fn validation_error_displays_message_only() {
        let err = ValidationError::new("rating", "Rating must be a whole number between 1 and 5");
        assert_eq!(
            err.to_string(),
            "Rating must be a whole number between 1 and 5"
        );
        assert_eq!(err.field, "rating");
    }
}
