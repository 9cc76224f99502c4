//! Theme administration for NeutralPress
//!
//! The themes page lists the built-in color themes, shows which one the site
//! currently uses, and lets an administrator switch the whole site to another
//! one.
//!
//! ```no_run
//! use app_state::{BroadcastReloadScheduler, TracingNotifier};
//! use settings_client::{HttpSettingsClient, SettingsClientConfig};
//! use std::sync::Arc;
//! use theme_admin::ThemesPage;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = HttpSettingsClient::new(SettingsClientConfig::new("https://blog.example.com"))?;
//! let reloads = Arc::new(BroadcastReloadScheduler::new());
//! let page = ThemesPage::new(Arc::new(client), Arc::new(TracingNotifier), reloads.clone())?;
//!
//! page.load_initial_colors().await?;
//! for card in page.cards() {
//!     println!("{} {} [{}]", card.name, card.version_label, card.action.label);
//! }
//! page.activate("ocean-blue").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod page;

pub use page::{
    ButtonVariant, CardAction, CardLabels, PageConfig, PageError, ThemeCard, ThemePreview,
    ThemesPage,
};
