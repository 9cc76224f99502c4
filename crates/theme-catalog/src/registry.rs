//! Theme descriptors and the read-only theme registry
//!
//! The registry is an ordered, immutable catalog. Order matters: the resolver
//! breaks ties between themes sharing a primary color by registry order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::builtin;
use crate::color::ColorTokenSet;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two descriptors share the same id
    #[error("Duplicate theme id: {0}")]
    DuplicateId(String),

    /// A descriptor has an empty id
    #[error("Theme at position {0} has an empty id")]
    EmptyId(usize),

    /// A color token is not a valid hex color
    #[error("Theme {theme_id} has an invalid {mode}.{slot} color: {value:?}")]
    InvalidColor {
        /// Offending theme
        theme_id: String,
        /// "light" or "dark"
        mode: &'static str,
        /// Token slot name
        slot: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A selectable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Stable unique identifier (e.g., "ocean-blue")
    pub id: String,
    /// Display name
    pub name: String,
    /// Theme version (e.g., "1.0.0")
    pub version: String,
    /// Theme author
    pub author: String,
    /// Short description shown on the theme card
    pub description: String,
    /// Light and dark color tokens
    pub color_tokens: ColorTokenSet,
}

/// Immutable, ordered theme catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDescriptor>,
}

impl ThemeRegistry {
    /// Build a registry, checking that every id is non-empty and unique
    pub fn new(themes: Vec<ThemeDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(themes.len());
        for (index, theme) in themes.iter().enumerate() {
            if theme.id.is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !seen.insert(theme.id.as_str()) {
                return Err(CatalogError::DuplicateId(theme.id.clone()));
            }
        }
        drop(seen);
        tracing::debug!(count = themes.len(), "theme registry built");
        Ok(Self { themes })
    }

    /// The compiled-in catalog shared by the whole process
    pub fn built_in() -> &'static ThemeRegistry {
        static BUILT_IN: OnceLock<ThemeRegistry> = OnceLock::new();
        BUILT_IN.get_or_init(|| Self {
            themes: builtin::built_in_themes(),
        })
    }

    /// All descriptors in registry order
    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    /// Iterate over descriptors in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, ThemeDescriptor> {
        self.themes.iter()
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Check whether a descriptor with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Check whether this exact descriptor is a catalog member
    pub fn is_member(&self, theme: &ThemeDescriptor) -> bool {
        self.get(&theme.id).is_some_and(|entry| entry == theme)
    }

    /// Ids in registry order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|theme| theme.id.as_str())
    }

    /// Number of themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Check that every token of every theme is a valid hex color
    ///
    /// Catalog data is authored by hand, so this runs in tests rather than on
    /// the activation path.
    pub fn validate_colors(&self) -> Result<()> {
        for theme in &self.themes {
            let modes = [
                ("light", &theme.color_tokens.light),
                ("dark", &theme.color_tokens.dark),
            ];
            for (mode, tokens) in modes {
                if let Some((slot, value)) = tokens.first_invalid_slot() {
                    return Err(CatalogError::InvalidColor {
                        theme_id: theme.id.clone(),
                        mode,
                        slot,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ThemeRegistry {
    type Item = &'a ThemeDescriptor;
    type IntoIter = std::slice::Iter<'a, ThemeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(id: &str) -> ThemeDescriptor {
        let mut theme = ThemeRegistry::built_in().themes()[0].clone();
        theme.id = id.to_string();
        theme
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = ThemeRegistry::new(vec![with_id("a"), with_id("b"), with_id("a")]);
        assert_eq!(result, Err(CatalogError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let result = ThemeRegistry::new(vec![with_id("a"), with_id("")]);
        assert_eq!(result, Err(CatalogError::EmptyId(1)));
    }

    #[test]
    fn test_new_keeps_order() {
        let registry = ThemeRegistry::new(vec![with_id("z"), with_id("a"), with_id("m")]).unwrap();
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ThemeRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("neutral-default").is_none());
    }

    #[test]
    fn test_built_in_is_well_formed() {
        let registry = ThemeRegistry::built_in();
        assert_eq!(ThemeRegistry::new(registry.themes().to_vec()).as_ref(), Ok(registry));
        assert_eq!(registry.validate_colors(), Ok(()));
    }

    #[test]
    fn test_built_in_is_shared() {
        assert!(std::ptr::eq(ThemeRegistry::built_in(), ThemeRegistry::built_in()));
    }

    #[test]
    fn test_get_and_contains() {
        let registry = ThemeRegistry::built_in();
        let ocean = registry.get("ocean-blue").unwrap();
        assert_eq!(ocean.name, "Ocean Blue");
        assert!(registry.contains("ocean-blue"));
        assert!(!registry.contains("ocean-green"));
    }

    #[test]
    fn test_is_member_requires_identical_descriptor() {
        let registry = ThemeRegistry::built_in();
        let ocean = registry.get("ocean-blue").unwrap().clone();
        assert!(registry.is_member(&ocean));

        let mut tampered = ocean;
        tampered.color_tokens.light.primary = "#000000".to_string();
        assert!(!registry.is_member(&tampered));
    }

    #[test]
    fn test_validate_colors_reports_slot() {
        let mut theme = with_id("broken");
        theme.color_tokens.dark.muted = "grey".to_string();
        let registry = ThemeRegistry::new(vec![theme]).unwrap();

        assert_eq!(
            registry.validate_colors(),
            Err(CatalogError::InvalidColor {
                theme_id: "broken".to_string(),
                mode: "dark",
                slot: "muted",
                value: "grey".to_string(),
            })
        );
    }

    #[test]
    fn test_descriptor_json_shape() {
        let json = serde_json::to_value(ThemeRegistry::built_in().get("ocean-blue").unwrap()).unwrap();
        assert_eq!(json["id"], "ocean-blue");
        assert_eq!(json["colorTokens"]["light"]["primary"], "#1E40AF");
    }
}
