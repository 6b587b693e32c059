//! Error taxonomy for the auth API boundary.
//!
//! ERROR HANDLING
//! ==============
//! Failures are ordinary values: transport failures, non-2xx statuses (with
//! the server's own message preserved when the body carries one), and
//! malformed success bodies are kept distinct so callers can choose their own
//! notification and redirect behavior.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// An error from the auth API collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// Human-readable message extracted from the error body, if any.
        message: Option<String>,
    },
    /// The server answered 2xx but the body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-supplied message for a status error, when one was present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Build a `Status` error from a non-2xx response body.
    ///
    /// The backend reports failures as `{"error": "..."}`; `{"message": "..."}`
    /// is accepted as a fallback key.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: extract_server_message(body),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))?
        .as_str()
        .map(ToOwned::to_owned)
}
