//! Settings API client
//!
//! This crate provides the contract the admin panel uses to read and write
//! site settings, plus an HTTP implementation of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod http;
pub mod types;

pub use api::SettingsApi;
pub use http::{HttpSettingsClient, SettingsClientConfig};
pub use types::{SettingEntry, SettingsSnapshot, UpdateSettingsRequest, UpdateSettingsResponse};

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Error types for settings operations
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// API error with status code and message
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },
}

impl SettingsError {
    /// The error's own message, without the variant prefix
    pub fn message(&self) -> String {
        match self {
            SettingsError::Network(e) => e.to_string(),
            SettingsError::Json(e) => e.to_string(),
            SettingsError::InvalidConfig(message) => message.clone(),
            SettingsError::Api { message, .. } => message.clone(),
        }
    }
}
