//! Theme activation
//!
//! Activating a theme writes its full color set to the `site.color` setting,
//! tells the administrator how it went, and on success schedules a reload so
//! the new colors reach every part of the running application.
//!
//! At most one activation runs per session. While one is in flight its theme
//! id is published as the "activating" marker; the marker is owned by a drop
//! guard and is cleared on every exit path, including panics and cancelled
//! futures.

use settings_client::{SettingEntry, SettingsApi, UpdateSettingsRequest};
use std::sync::Arc;
use std::time::Duration;
use theme_catalog::{SiteColorSetting, ThemeDescriptor, SITE_COLOR_KEY};
use thiserror::Error;
use tokio::sync::watch;

use crate::active::ActiveThemeTracker;
use crate::notify::Notifier;
use crate::reload::{ReloadScheduler, DEFAULT_RELOAD_DELAY};

// =============================================================================
// Errors and Outcomes
// =============================================================================

/// Reasons an activation was not attempted
///
/// None of these send a request, set the activating marker, or notify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// The descriptor is not a member of the registry
    #[error("Theme is not in the catalog: {0}")]
    UnknownTheme(String),

    /// The theme is already the active one
    #[error("Theme is already active: {0}")]
    AlreadyActive(String),

    /// Another activation is still in flight
    #[error("Activation of {0} is still in progress")]
    InProgress(String),
}

/// Result type for activation requests
pub type Result<T> = std::result::Result<T, ActivationError>;

/// How an attempted activation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The server accepted the new colors
    Applied,

    /// The server processed the write and refused it
    Rejected {
        /// Message shown to the administrator
        message: String,
    },

    /// The write never got a verdict
    Failed {
        /// Message shown to the administrator
        message: String,
    },
}

impl ActivationOutcome {
    /// Whether the theme was applied
    pub fn is_applied(&self) -> bool {
        matches!(self, ActivationOutcome::Applied)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Titles and messages used for activation notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationText {
    /// Title of the success notification
    pub applied_title: String,
    /// Success message; `{name}` is replaced with the theme name
    pub applied_message: String,
    /// Title of the rejection notification
    pub rejected_title: String,
    /// Message used when the server rejects without a reason
    pub rejected_fallback: String,
    /// Title of the failure notification
    pub failed_title: String,
    /// Message used when a failure carries no usable message
    pub unknown_error: String,
}

impl Default for NotificationText {
    fn default() -> Self {
        Self {
            applied_title: "Theme applied".to_string(),
            applied_message: "Switched to the {name} theme".to_string(),
            rejected_title: "Apply failed".to_string(),
            rejected_fallback: "Unable to save the theme configuration".to_string(),
            failed_title: "Something went wrong".to_string(),
            unknown_error: "Unknown error".to_string(),
        }
    }
}

impl NotificationText {
    /// Simplified Chinese text
    pub fn zh_cn() -> Self {
        Self {
            applied_title: "应用成功".to_string(),
            applied_message: "已成功切换到 {name} 主题".to_string(),
            rejected_title: "应用失败".to_string(),
            rejected_fallback: "无法保存主题配置".to_string(),
            failed_title: "发生错误".to_string(),
            unknown_error: "未知错误".to_string(),
        }
    }

    /// Render the success message for a theme
    pub fn applied_message_for(&self, theme_name: &str) -> String {
        self.applied_message.replace("{name}", theme_name)
    }
}

/// Activator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatorConfig {
    /// Setting key the color set is written to
    pub settings_key: String,
    /// Delay between a confirmed activation and the reload
    pub reload_delay: Duration,
    /// Notification text
    pub text: NotificationText,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        Self {
            settings_key: SITE_COLOR_KEY.to_string(),
            reload_delay: DEFAULT_RELOAD_DELAY,
            text: NotificationText::default(),
        }
    }
}

impl ActivatorConfig {
    /// Set the reload delay
    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    /// Set the notification text
    pub fn with_text(mut self, text: NotificationText) -> Self {
        self.text = text;
        self
    }
}

// =============================================================================
// Activating Marker
// =============================================================================

/// Clears the activating marker when dropped
struct ActivatingGuard<'a> {
    activating_tx: &'a watch::Sender<Option<String>>,
}

impl<'a> ActivatingGuard<'a> {
    /// Claim the marker for `id`, or report who holds it
    fn acquire(activating_tx: &'a watch::Sender<Option<String>>, id: &str) -> Result<Self> {
        let mut holder = None;
        activating_tx.send_if_modified(|current| match current {
            Some(existing) => {
                holder = Some(existing.clone());
                false
            }
            None => {
                *current = Some(id.to_string());
                true
            }
        });

        match holder {
            Some(existing) => Err(ActivationError::InProgress(existing)),
            None => Ok(Self { activating_tx }),
        }
    }
}

impl Drop for ActivatingGuard<'_> {
    fn drop(&mut self) {
        self.activating_tx.send_replace(None);
    }
}

// =============================================================================
// Activator
// =============================================================================

/// Applies catalog themes to the site
pub struct ThemeActivator {
    settings: Arc<dyn SettingsApi>,
    notifier: Arc<dyn Notifier>,
    reloader: Arc<dyn ReloadScheduler>,
    tracker: Arc<ActiveThemeTracker>,
    activating_tx: watch::Sender<Option<String>>,
    config: ActivatorConfig,
}

impl ThemeActivator {
    /// Create an activator
    pub fn new(
        settings: Arc<dyn SettingsApi>,
        notifier: Arc<dyn Notifier>,
        reloader: Arc<dyn ReloadScheduler>,
        tracker: Arc<ActiveThemeTracker>,
        config: ActivatorConfig,
    ) -> Self {
        let (activating_tx, _) = watch::channel(None);
        Self {
            settings,
            notifier,
            reloader,
            tracker,
            activating_tx,
            config,
        }
    }

    /// Get the activator configuration
    pub fn config(&self) -> &ActivatorConfig {
        &self.config
    }

    /// The tracker this activator confirms into
    pub fn tracker(&self) -> &Arc<ActiveThemeTracker> {
        &self.tracker
    }

    /// Id of the theme currently being activated, if any
    pub fn activating_id(&self) -> Option<String> {
        self.activating_tx.borrow().clone()
    }

    /// Check whether `id` is currently being activated
    pub fn is_activating(&self, id: &str) -> bool {
        self.activating_tx.borrow().as_deref() == Some(id)
    }

    /// Subscribe to changes of the activating marker
    pub fn subscribe_activating(&self) -> watch::Receiver<Option<String>> {
        self.activating_tx.subscribe()
    }

    /// Make `theme` the site-wide color configuration
    ///
    /// Returns an error, without touching any state, when the theme is not in
    /// the catalog, is already active, or another activation is in flight.
    /// Otherwise exactly one notification is sent and the outcome returned.
    /// Failed activations are not retried.
    pub async fn activate(&self, theme: &ThemeDescriptor) -> Result<ActivationOutcome> {
        if !self.tracker.registry().is_member(theme) {
            return Err(ActivationError::UnknownTheme(theme.id.clone()));
        }
        if self.tracker.is_active(&theme.id) {
            return Err(ActivationError::AlreadyActive(theme.id.clone()));
        }

        let _guard = ActivatingGuard::acquire(&self.activating_tx, &theme.id)?;
        tracing::info!(theme_id = %theme.id, "activating theme");

        let outcome = self.submit(theme).await;
        self.report(theme, &outcome);
        Ok(outcome)
    }

    async fn submit(&self, theme: &ThemeDescriptor) -> ActivationOutcome {
        let setting = SiteColorSetting::new(theme.color_tokens.clone());
        let entry = match SettingEntry::from_serialize(self.config.settings_key.as_str(), &setting) {
            Ok(entry) => entry,
            Err(e) => {
                return ActivationOutcome::Failed {
                    message: self.failure_message(&e.message()),
                }
            }
        };

        match self
            .settings
            .update_settings(UpdateSettingsRequest::single(entry))
            .await
        {
            Ok(response) if response.success => ActivationOutcome::Applied,
            Ok(response) => ActivationOutcome::Rejected {
                message: response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| self.config.text.rejected_fallback.clone()),
            },
            Err(e) => ActivationOutcome::Failed {
                message: self.failure_message(&e.message()),
            },
        }
    }

    fn failure_message(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            self.config.text.unknown_error.clone()
        } else {
            raw.to_string()
        }
    }

    fn report(&self, theme: &ThemeDescriptor, outcome: &ActivationOutcome) {
        let text = &self.config.text;
        match outcome {
            ActivationOutcome::Applied => {
                tracing::info!(theme_id = %theme.id, "theme applied");
                self.notifier
                    .success(&text.applied_title, &text.applied_message_for(&theme.name));
                self.tracker.confirm(&theme.id);
                self.reloader.schedule_reload(&theme.id, self.config.reload_delay);
            }
            ActivationOutcome::Rejected { message } => {
                tracing::warn!(theme_id = %theme.id, %message, "theme activation rejected");
                self.notifier.error(&text.rejected_title, message);
            }
            ActivationOutcome::Failed { message } => {
                tracing::error!(theme_id = %theme.id, %message, "theme activation failed");
                self.notifier.error(&text.failed_title, message);
            }
        }
    }
}
