//! Error handling for the inventory client
//!
//! Every failure ends up as one user-visible message on the active screen;
//! [`ClientError::user_message`] picks the text to show.

use serde::Deserialize;
use shared::ValidationErrors;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    // Network errors
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // Server-reported errors
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    Decode(String),

    // Client-side validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error body returned by the inventory API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-blank `message` from a raw response body
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

impl ClientError {
    /// Text to show the user: the server's message or the validation
    /// summary when there is one, `fallback` otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Validation(errors) => errors.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for API calls
pub type ClientResult<T> = Result<T, ClientError>;
