//! Session state for the theme administration page
//!
//! Holds the applied site colors, tracks which catalog theme they belong to,
//! and runs theme activations against the settings service.
//!
//! ```
//! use app_state::{ActiveThemeTracker, ThemeContext};
//! use std::sync::Arc;
//! use theme_catalog::ThemeRegistry;
//!
//! let registry = Arc::new(ThemeRegistry::built_in().clone());
//! let context = ThemeContext::with_fallback(&registry).unwrap();
//! let tracker = ActiveThemeTracker::for_context(registry, &context);
//!
//! assert_eq!(tracker.active_id(), "neutral-default");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activation;
pub mod active;
pub mod context;
pub mod notify;
pub mod reload;

pub use activation::{
    ActivationError, ActivationOutcome, ActivatorConfig, NotificationText, ThemeActivator,
};
pub use active::{ActiveThemeTracker, SyncHandle};
pub use context::ThemeContext;
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier};
pub use reload::{BroadcastReloadScheduler, ReloadRequest, ReloadScheduler, DEFAULT_RELOAD_DELAY};
