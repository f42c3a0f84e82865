//! Client error types.

use cla_core::{Auth, EndpointError, HttpMethod};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No credentials configured for {0}")]
    MissingCredentials(&'static str),

    #[error("No transport surface for {method} with {auth} auth")]
    UnsupportedSurface { method: HttpMethod, auth: Auth },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// HTTP status of a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human-readable message carried in a JSON error body.
    ///
    /// Looks for a top-level `message` or `Message` string first, then the
    /// same keys under `errors`. The v1/v2 backend capitalizes the key.
    pub fn server_message(&self) -> Option<String> {
        let ClientError::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        message_field(&value)
            .or_else(|| value.get("errors").and_then(message_field))
            .map(str::to_string)
    }
}

fn message_field(value: &serde_json::Value) -> Option<&str> {
    ["message", "Message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|m| m.as_str()))
}
