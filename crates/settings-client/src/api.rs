//! The settings collaborator contract

use async_trait::async_trait;

use crate::types::{SettingsSnapshot, UpdateSettingsRequest, UpdateSettingsResponse};
use crate::Result;

/// Read/write access to site settings
///
/// `update_settings` distinguishes two kinds of failure: a write the server
/// processed and refused comes back as `Ok` with `success == false`, while a
/// write that never got a verdict (transport failure, malformed reply) is an
/// `Err`.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Read the current settings
    async fn get_settings(&self) -> Result<SettingsSnapshot>;

    /// Write one or more settings
    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<UpdateSettingsResponse>;
}
