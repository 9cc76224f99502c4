//! Request and response types for the settings API

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// A single setting key/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    /// Dotted setting key (e.g., "site.color")
    pub key: String,
    /// Arbitrary JSON value
    pub value: Value,
}

impl SettingEntry {
    /// Create an entry from a raw JSON value
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Create an entry by serializing a typed value
    pub fn from_serialize<T: Serialize>(key: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self::new(key, serde_json::to_value(value)?))
    }
}

/// Payload for a settings write
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    /// Entries to write
    pub settings: Vec<SettingEntry>,
}

impl UpdateSettingsRequest {
    /// Create a request with a single entry
    pub fn single(entry: SettingEntry) -> Self {
        Self {
            settings: vec![entry],
        }
    }

    /// Add an entry
    pub fn with(mut self, entry: SettingEntry) -> Self {
        self.settings.push(entry);
        self
    }
}

/// Result of a settings write as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateSettingsResponse {
    /// Whether the server accepted the write
    pub success: bool,
    /// Optional human-readable reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UpdateSettingsResponse {
    /// An accepted write
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A rejected write with an optional reason
    pub fn rejected(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Current settings as read from the server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// All known entries
    pub settings: Vec<SettingEntry>,
}

impl SettingsSnapshot {
    /// Create a snapshot from entries
    pub fn new(settings: Vec<SettingEntry>) -> Self {
        Self { settings }
    }

    /// Get the raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Get a value for a key, deserialized into `T`
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }
}
