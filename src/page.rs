//! Themes page session
//!
//! Wires the catalog, the settings service, and the session state together
//! and turns them into per-theme card view models.

use app_state::{
    ActivationError, ActivationOutcome, ActiveThemeTracker, ActivatorConfig, Notifier,
    ReloadScheduler, SyncHandle, ThemeActivator, ThemeContext,
};
use settings_client::{SettingsApi, SettingsError};
use std::sync::Arc;
use theme_catalog::{ColorTokenSet, SiteColorSetting, ThemeDescriptor, ThemeRegistry};
use thiserror::Error;

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors surfaced by the themes page
#[derive(Debug, Error)]
pub enum PageError {
    /// The catalog has no fallback theme to start from
    #[error("Theme catalog has no fallback theme")]
    MissingFallback,

    /// Reading settings failed
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Activation was not attempted
    #[error(transparent)]
    Activation(#[from] ActivationError),
}

// =============================================================================
// View Models
// =============================================================================

/// Visual style of a card button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, primary call to action
    Primary,
    /// Outlined, secondary look
    Outline,
}

/// Button shown on a theme card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    /// Button text
    pub label: String,
    /// Button style
    pub variant: ButtonVariant,
    /// Whether the button ignores clicks
    pub disabled: bool,
    /// Whether the button shows a spinner
    pub loading: bool,
}

/// Swatches rendered in a card's preview area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreview {
    /// Light page background
    pub light_background: String,
    /// Light body text
    pub light_foreground: String,
    /// Light border
    pub light_border: String,
    /// Light primary accent
    pub light_primary: String,
    /// Text on the light primary accent
    pub light_primary_foreground: String,
    /// Light muted surface
    pub light_muted: String,
    /// Light secondary surface
    pub light_secondary: String,
    /// Dark page background
    pub dark_background: String,
    /// Dark border
    pub dark_border: String,
    /// Dark primary accent
    pub dark_primary: String,
}

impl ThemePreview {
    fn from_colors(colors: &ColorTokenSet) -> Self {
        let light = &colors.light;
        let dark = &colors.dark;
        Self {
            light_background: light.background.clone(),
            light_foreground: light.foreground.clone(),
            light_border: light.border.clone(),
            light_primary: light.primary.clone(),
            light_primary_foreground: light.primary_foreground.clone(),
            light_muted: light.muted.clone(),
            light_secondary: light.secondary.clone(),
            dark_background: dark.background.clone(),
            dark_border: dark.border.clone(),
            dark_primary: dark.primary.clone(),
        }
    }
}

/// Everything needed to render one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCard {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Version prefixed with `v`
    pub version_label: String,
    /// Theme author
    pub author: String,
    /// One-line description
    pub description: String,
    /// Preview swatches
    pub preview: ThemePreview,
    /// Whether this is the active theme
    pub is_active: bool,
    /// Whether this theme is being activated
    pub is_activating: bool,
    /// Card button
    pub action: CardAction,
}

/// Button labels for theme cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLabels {
    /// Label on the active theme's card
    pub applied: String,
    /// Label on every other card
    pub apply: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            applied: "Applied".to_string(),
            apply: "Apply".to_string(),
        }
    }
}

impl CardLabels {
    /// Simplified Chinese labels
    pub fn zh_cn() -> Self {
        Self {
            applied: "已应用".to_string(),
            apply: "立即应用".to_string(),
        }
    }
}

/// Page configuration
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    /// Activator settings
    pub activator: ActivatorConfig,
    /// Card button labels
    pub labels: CardLabels,
}

impl PageConfig {
    /// English text throughout
    pub fn english() -> Self {
        Self::default()
    }

    /// Simplified Chinese text throughout
    pub fn zh_cn() -> Self {
        Self {
            activator: ActivatorConfig::default().with_text(app_state::NotificationText::zh_cn()),
            labels: CardLabels::zh_cn(),
        }
    }

    /// Replace the activator settings
    pub fn with_activator(mut self, activator: ActivatorConfig) -> Self {
        self.activator = activator;
        self
    }
}

// =============================================================================
// Page
// =============================================================================

/// A live themes page
///
/// Must be created inside a tokio runtime: construction spawns the task that
/// keeps the active theme in sync with the applied colors.
pub struct ThemesPage {
    registry: Arc<ThemeRegistry>,
    settings: Arc<dyn SettingsApi>,
    context: Arc<ThemeContext>,
    tracker: Arc<ActiveThemeTracker>,
    activator: ThemeActivator,
    labels: CardLabels,
    _sync: SyncHandle,
}

impl ThemesPage {
    /// Create a page over the built-in catalog with English text
    pub fn new(
        settings: Arc<dyn SettingsApi>,
        notifier: Arc<dyn Notifier>,
        reloader: Arc<dyn ReloadScheduler>,
    ) -> Result<Self> {
        Self::with_config(
            Arc::new(ThemeRegistry::built_in().clone()),
            settings,
            notifier,
            reloader,
            PageConfig::default(),
        )
    }

    /// Create a page over any catalog
    ///
    /// The context starts out showing the catalog's fallback theme.
    pub fn with_config(
        registry: Arc<ThemeRegistry>,
        settings: Arc<dyn SettingsApi>,
        notifier: Arc<dyn Notifier>,
        reloader: Arc<dyn ReloadScheduler>,
        config: PageConfig,
    ) -> Result<Self> {
        let context = ThemeContext::with_fallback(&registry).ok_or(PageError::MissingFallback)?;
        let context = Arc::new(context);
        let tracker = Arc::new(ActiveThemeTracker::for_context(registry.clone(), &context));
        let sync = tracker.spawn_sync(&context);
        let activator = ThemeActivator::new(
            settings.clone(),
            notifier,
            reloader,
            tracker.clone(),
            config.activator,
        );

        Ok(Self {
            registry,
            settings,
            context,
            tracker,
            activator,
            labels: config.labels,
            _sync: sync,
        })
    }

    /// The theme catalog
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The shared theming context
    pub fn context(&self) -> &Arc<ThemeContext> {
        &self.context
    }

    /// Current active theme id
    pub fn active_id(&self) -> String {
        self.tracker.active_id()
    }

    /// Id of the theme being activated, if any
    pub fn activating_id(&self) -> Option<String> {
        self.activator.activating_id()
    }

    /// Apply the persisted site colors to the context
    ///
    /// Returns whether the applied colors changed. A missing or malformed
    /// `site.color` setting leaves the context as it is.
    pub async fn load_initial_colors(&self) -> Result<bool> {
        let snapshot = self.settings.get_settings().await?;
        let key = self.activator.config().settings_key.as_str();

        let setting = match snapshot.get_as::<SiteColorSetting>(key) {
            Ok(Some(setting)) => setting,
            Ok(None) => {
                tracing::debug!(key, "no persisted site colors");
                return Ok(false);
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed site colors");
                return Ok(false);
            }
        };

        let changed = self.context.apply(setting.default);
        // The sync task will get there too; resolve now so callers see it
        self.tracker.recompute(&self.context.current_light());
        Ok(changed)
    }

    /// Card view models in catalog order
    pub fn cards(&self) -> Vec<ThemeCard> {
        self.registry.iter().map(|theme| self.card(theme)).collect()
    }

    fn card(&self, theme: &ThemeDescriptor) -> ThemeCard {
        let is_active = self.tracker.is_active(&theme.id);
        let is_activating = self.activator.is_activating(&theme.id);

        let action = if is_active {
            CardAction {
                label: self.labels.applied.clone(),
                variant: ButtonVariant::Outline,
                disabled: true,
                loading: false,
            }
        } else {
            CardAction {
                label: self.labels.apply.clone(),
                variant: ButtonVariant::Primary,
                disabled: is_activating,
                loading: is_activating,
            }
        };

        ThemeCard {
            id: theme.id.clone(),
            name: theme.name.clone(),
            version_label: format!("v{}", theme.version),
            author: theme.author.clone(),
            description: theme.description.clone(),
            preview: ThemePreview::from_colors(&theme.color_tokens),
            is_active,
            is_activating,
            action,
        }
    }

    /// Activate a catalog theme by id
    pub async fn activate(&self, id: &str) -> Result<ActivationOutcome> {
        let theme = self
            .registry
            .get(id)
            .ok_or_else(|| ActivationError::UnknownTheme(id.to_string()))?;
        Ok(self.activator.activate(theme).await?)
    }
}
