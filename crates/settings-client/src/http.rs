//! HTTP settings client
//!
//! Talks to the admin settings endpoint with JSON bodies:
//!
//! - `GET {base_url}{settings_path}` returns `{ success, data: [entry], message? }`
//! - `POST {base_url}{settings_path}` takes `{ settings: [entry] }` and returns
//!   `{ success, message? }`

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::api::SettingsApi;
use crate::types::{SettingEntry, SettingsSnapshot, UpdateSettingsRequest, UpdateSettingsResponse};
use crate::{Result, SettingsError};

// =============================================================================
// Client Configuration
// =============================================================================

/// Default path of the settings endpoint
pub const DEFAULT_SETTINGS_PATH: &str = "/api/settings";

/// Configuration for the HTTP settings client
#[derive(Debug, Clone)]
pub struct SettingsClientConfig {
    /// Base service URL (e.g., "https://blog.example.com")
    pub base_url: String,
    /// Path of the settings endpoint
    pub settings_path: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for SettingsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            settings_path: DEFAULT_SETTINGS_PATH.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("NeutralPress-Themes/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl SettingsClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the settings endpoint path
    pub fn with_settings_path(mut self, path: impl Into<String>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Authenticate every request with a bearer token
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_header("Authorization", value)
    }

    /// Full URL of the settings endpoint
    pub fn settings_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.settings_path.trim_start_matches('/')
        )
    }
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Envelope returned by the settings endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Settings client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpSettingsClient {
    /// HTTP client
    client: ReqwestClient,
    /// Configuration
    config: SettingsClientConfig,
}

impl HttpSettingsClient {
    /// Create a new settings client
    pub fn new(config: SettingsClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(SettingsError::InvalidConfig("base_url is empty".to_string()));
        }

        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &SettingsClientConfig {
        &self.config
    }

    fn with_default_headers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }
        req
    }

    /// Read a non-2xx response, parsing the envelope when there is one
    async fn read_error_body(response: ReqwestResponse) -> (u16, String, Option<Envelope<serde_json::Value>>) {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(status, error = %e, "failed to read error response body");
                String::new()
            }
        };
        let envelope = serde_json::from_str::<Envelope<serde_json::Value>>(&body).ok();
        (status, body, envelope)
    }
}

#[async_trait]
impl SettingsApi for HttpSettingsClient {
    async fn get_settings(&self) -> Result<SettingsSnapshot> {
        let url = self.config.settings_url();
        tracing::debug!(%url, "fetching settings");

        let response = self.with_default_headers(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            let (status, body, envelope) = Self::read_error_body(response).await;
            let message = envelope
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}: {}", status, body));
            return Err(SettingsError::Api { status, message });
        }

        let status = response.status().as_u16();
        let envelope: Envelope<Vec<SettingEntry>> = response.json().await?;
        if !envelope.success {
            return Err(SettingsError::Api {
                status,
                message: envelope
                    .message
                    .unwrap_or_else(|| "Settings read was refused".to_string()),
            });
        }

        Ok(SettingsSnapshot::new(envelope.data.unwrap_or_default()))
    }

    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<UpdateSettingsResponse> {
        let url = self.config.settings_url();
        let keys: Vec<&str> = request.settings.iter().map(|s| s.key.as_str()).collect();
        tracing::debug!(%url, ?keys, "writing settings");

        let response = self
            .with_default_headers(self.client.post(&url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body, envelope) = Self::read_error_body(response).await;
            return match envelope {
                // The server looked at the write and said no
                Some(envelope) if !envelope.success => {
                    tracing::warn!(status, message = ?envelope.message, "settings write rejected");
                    Ok(UpdateSettingsResponse::rejected(envelope.message))
                }
                _ => Err(SettingsError::Api {
                    status,
                    message: format!("HTTP {}: {}", status, body),
                }),
            };
        }

        let envelope: Envelope<serde_json::Value> = response.json().await?;
        Ok(UpdateSettingsResponse {
            success: envelope.success,
            message: envelope.message,
        })
    }
}
