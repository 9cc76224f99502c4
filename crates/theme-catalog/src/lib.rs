//! Built-in theme catalog for the NeutralPress admin panel
//!
//! This crate provides the read-only registry of selectable site themes,
//! the color token model each theme carries, and the resolver that maps the
//! currently applied colors back to a catalog entry.
//!
//! # Modules
//!
//! - [`color`] - Color helpers and light/dark color token sets
//! - [`registry`] - Theme descriptors and the immutable registry
//! - [`builtin`] - The compiled-in catalog data
//! - [`resolver`] - Active-theme resolution by primary color
//!
//! # Example
//!
//! ```rust
//! use theme_catalog::{resolve_active_id, ThemeRegistry, FALLBACK_THEME_ID};
//!
//! let registry = ThemeRegistry::built_in();
//! let ocean = registry.get("ocean-blue").unwrap();
//!
//! let active = resolve_active_id(&ocean.color_tokens.light, registry.themes());
//! assert_eq!(active, "ocean-blue");
//!
//! let mut custom = ocean.color_tokens.light.clone();
//! custom.primary = "#000000".to_string();
//! assert_eq!(resolve_active_id(&custom, registry.themes()), FALLBACK_THEME_ID);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtin;
pub mod color;
pub mod registry;
pub mod resolver;

pub use color::{
    parse_hex_color, Color, ColorTokenSet, ColorTokens, SiteColorSetting, SITE_COLOR_KEY,
};
pub use registry::{CatalogError, Result, ThemeDescriptor, ThemeRegistry};
pub use resolver::{resolve_active_id, FALLBACK_THEME_ID};
