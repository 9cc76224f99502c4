//! Color tokens for site themes
//!
//! A theme carries one [`ColorTokens`] per appearance mode, paired up in a
//! [`ColorTokenSet`]. The same shape is written to the settings store under
//! the `site.color` key, wrapped in a [`SiteColorSetting`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#1E40AF")
pub type Color = String;

/// Settings key holding the site-wide color configuration
pub const SITE_COLOR_KEY: &str = "site.color";

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Named color slots for one appearance mode
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Page background
    pub background: Color,
    /// Default text color
    pub foreground: Color,
    /// Primary brand color (buttons, links, active markers)
    pub primary: Color,
    /// Text drawn on top of `primary`
    pub primary_foreground: Color,
    /// Secondary surfaces and buttons
    pub secondary: Color,
    /// Text drawn on top of `secondary`
    pub secondary_foreground: Color,
    /// Muted surfaces (placeholders, skeletons)
    pub muted: Color,
    /// Muted text
    pub muted_foreground: Color,
    /// Accent highlights
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub accent_foreground: Color,
    /// Borders and dividers
    pub border: Color,
}

impl ColorTokens {
    /// Iterate over `(slot name, color)` pairs in declaration order
    pub fn slots(&self) -> [(&'static str, &str); 11] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("primary", self.primary.as_str()),
            ("primaryForeground", self.primary_foreground.as_str()),
            ("secondary", self.secondary.as_str()),
            ("secondaryForeground", self.secondary_foreground.as_str()),
            ("muted", self.muted.as_str()),
            ("mutedForeground", self.muted_foreground.as_str()),
            ("accent", self.accent.as_str()),
            ("accentForeground", self.accent_foreground.as_str()),
            ("border", self.border.as_str()),
        ]
    }

    /// Return the first slot whose value is not a valid hex color
    pub fn first_invalid_slot(&self) -> Option<(&'static str, &str)> {
        self.slots()
            .into_iter()
            .find(|(_, color)| parse_hex_color(color).is_none())
    }
}

/// Paired light and dark color tokens for one theme
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTokenSet {
    /// Tokens used in light mode
    pub light: ColorTokens,
    /// Tokens used in dark mode
    pub dark: ColorTokens,
}

/// Value stored under [`SITE_COLOR_KEY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteColorSetting {
    /// Site-wide default color set
    pub default: ColorTokenSet,
}

impl SiteColorSetting {
    /// Wrap a color set as the site default
    pub fn new(tokens: ColorTokenSet) -> Self {
        Self { default: tokens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(primary: &str) -> ColorTokens {
        ColorTokens {
            background: "#FFFFFF".to_string(),
            foreground: "#0A0A0A".to_string(),
            primary: primary.to_string(),
            primary_foreground: "#FFFFFF".to_string(),
            secondary: "#F4F4F5".to_string(),
            secondary_foreground: "#18181B".to_string(),
            muted: "#F4F4F5".to_string(),
            muted_foreground: "#71717A".to_string(),
            accent: "#F4F4F5".to_string(),
            accent_foreground: "#18181B".to_string(),
            border: "#E4E4E7".to_string(),
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#1E40AF"), Some((30, 64, 175)));
        assert_eq!(parse_hex_color("1e40af"), Some((30, 64, 175)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#1E40AF80"), None);
    }

    #[test]
    fn test_color_tokens_camel_case_json() {
        let json = serde_json::to_value(tokens("#1E40AF")).unwrap();
        assert_eq!(json["primary"], "#1E40AF");
        assert_eq!(json["primaryForeground"], "#FFFFFF");
        assert_eq!(json["mutedForeground"], "#71717A");
        assert!(json.get("primary_foreground").is_none());
    }

    #[test]
    fn test_first_invalid_slot() {
        assert_eq!(tokens("#1E40AF").first_invalid_slot(), None);

        let mut bad = tokens("#1E40AF");
        bad.border = "blue".to_string();
        assert_eq!(bad.first_invalid_slot(), Some(("border", "blue")));
    }

    #[test]
    fn test_site_color_setting_shape() {
        let setting = SiteColorSetting::new(ColorTokenSet {
            light: tokens("#1E40AF"),
            dark: tokens("#60A5FA"),
        });

        let json = serde_json::to_value(&setting).unwrap();
        assert_eq!(json["default"]["light"]["primary"], "#1E40AF");
        assert_eq!(json["default"]["dark"]["primary"], "#60A5FA");

        let parsed: SiteColorSetting = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, setting);
    }
}
