//! Error handling for the Inventory Console client
//!
//! Mirrors the failure taxonomy the UI distinguishes: bad credentials stay
//! inline on the login form, a rejected session forces a re-login, and every
//! other failure is terminal for the action that triggered it.

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    // Authentication errors
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The API rejected the current token; the session has already been
    /// invalidated by the time this surfaces
    #[error("Session rejected by the API")]
    SessionRejected,

    // API/transport errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // Local errors
    #[error("Credential storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// Whether this failure invalidated the session globally
    pub fn is_session_rejection(&self) -> bool {
        matches!(self, ClientError::SessionRejected)
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
