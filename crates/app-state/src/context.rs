//! Shared theming context
//!
//! Owns the color set currently applied to the site. Everything that renders
//! colors, and the active-theme tracker, reads from here and subscribes to
//! changes.

use theme_catalog::{ColorTokenSet, ColorTokens, ThemeRegistry, FALLBACK_THEME_ID};
use tokio::sync::watch;

/// Reactive holder of the applied site colors
///
/// # Example
///
/// ```
/// use app_state::context::ThemeContext;
/// use theme_catalog::ThemeRegistry;
///
/// let ocean = ThemeRegistry::built_in().get("ocean-blue").unwrap();
/// let context = ThemeContext::new(ocean.color_tokens.clone());
///
/// let rx = context.subscribe();
/// assert_eq!(rx.borrow().light.primary, "#1E40AF");
/// ```
#[derive(Debug)]
pub struct ThemeContext {
    colors_tx: watch::Sender<ColorTokenSet>,
}

impl ThemeContext {
    /// Create a context with the given applied colors
    pub fn new(colors: ColorTokenSet) -> Self {
        let (colors_tx, _) = watch::channel(colors);
        Self { colors_tx }
    }

    /// Create a context showing the catalog's fallback theme
    ///
    /// Returns `None` if the registry has no fallback entry.
    pub fn with_fallback(registry: &ThemeRegistry) -> Option<Self> {
        registry
            .get(FALLBACK_THEME_ID)
            .map(|theme| Self::new(theme.color_tokens.clone()))
    }

    /// Replace the applied colors
    ///
    /// Subscribers are only woken when the value actually changes. Returns
    /// whether it changed.
    pub fn apply(&self, colors: ColorTokenSet) -> bool {
        self.colors_tx.send_if_modified(|current| {
            if *current == colors {
                false
            } else {
                *current = colors;
                true
            }
        })
    }

    /// Snapshot of the applied colors
    pub fn current(&self) -> ColorTokenSet {
        self.colors_tx.borrow().clone()
    }

    /// Snapshot of the applied light-mode colors
    pub fn current_light(&self) -> ColorTokens {
        self.colors_tx.borrow().light.clone()
    }

    /// Subscribe to color changes
    pub fn subscribe(&self) -> watch::Receiver<ColorTokenSet> {
        self.colors_tx.subscribe()
    }
}
