//! Active-theme resolution
//!
//! The active theme is never stored. It is derived from the colors currently
//! applied to the site by comparing the light-mode primary color against each
//! catalog entry. This is a heuristic: a custom color configuration whose
//! primary happens to equal a catalog primary is reported as that theme, and
//! anything else falls back to [`FALLBACK_THEME_ID`].

use crate::color::ColorTokens;
use crate::registry::ThemeDescriptor;

/// Id reported when no catalog entry matches the applied colors
pub const FALLBACK_THEME_ID: &str = "neutral-default";

/// Resolve which catalog entry the applied light colors belong to
///
/// Returns the id of the first descriptor, in registry order, whose
/// `light.primary` equals `current_light.primary` exactly, or
/// [`FALLBACK_THEME_ID`] when none does.
pub fn resolve_active_id<'a>(current_light: &ColorTokens, themes: &'a [ThemeDescriptor]) -> &'a str {
    themes
        .iter()
        .find(|theme| theme.color_tokens.light.primary == current_light.primary)
        .map(|theme| theme.id.as_str())
        .unwrap_or(FALLBACK_THEME_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemeRegistry;
    use proptest::prelude::*;

    fn light_with_primary(primary: &str) -> ColorTokens {
        let mut light = ThemeRegistry::built_in().themes()[0].color_tokens.light.clone();
        light.primary = primary.to_string();
        light
    }

    fn theme_with(id: &str, primary: &str) -> ThemeDescriptor {
        let mut theme = ThemeRegistry::built_in().themes()[0].clone();
        theme.id = id.to_string();
        theme.color_tokens.light.primary = primary.to_string();
        theme
    }

    #[test]
    fn test_resolves_ocean_blue() {
        let themes = ThemeRegistry::built_in().themes();
        assert_eq!(resolve_active_id(&light_with_primary("#1E40AF"), themes), "ocean-blue");
    }

    #[test]
    fn test_unmatched_color_falls_back() {
        let themes = ThemeRegistry::built_in().themes();
        assert_eq!(resolve_active_id(&light_with_primary("#000000"), themes), FALLBACK_THEME_ID);
    }

    #[test]
    fn test_match_is_exact_string_equality() {
        let themes = ThemeRegistry::built_in().themes();
        // Same color, different spelling
        assert_eq!(resolve_active_id(&light_with_primary("#1e40af"), themes), FALLBACK_THEME_ID);
        assert_eq!(resolve_active_id(&light_with_primary("#1E40AE"), themes), FALLBACK_THEME_ID);
    }

    #[test]
    fn test_only_light_primary_is_compared() {
        let themes = ThemeRegistry::built_in().themes();
        let ocean = &themes[1];

        // Every other slot differs from ocean-blue
        let mut light = themes[0].color_tokens.light.clone();
        light.primary = ocean.color_tokens.light.primary.clone();
        assert_eq!(resolve_active_id(&light, themes), "ocean-blue");

        // Dark primary never matches a light primary lookup
        assert_eq!(
            resolve_active_id(&light_with_primary(&ocean.color_tokens.dark.primary), themes),
            FALLBACK_THEME_ID
        );
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        let themes = vec![
            theme_with("first", "#123456"),
            theme_with("second", "#ABCDEF"),
            theme_with("third", "#123456"),
        ];
        assert_eq!(resolve_active_id(&light_with_primary("#123456"), &themes), "first");
    }

    #[test]
    fn test_empty_registry_falls_back() {
        assert_eq!(resolve_active_id(&light_with_primary("#1E40AF"), &[]), FALLBACK_THEME_ID);
    }

    fn hex_color() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["#111111", "#222222", "#333333", "#444444", "#555555"])
            .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn resolved_id_is_member_or_fallback(
            primaries in prop::collection::vec(hex_color(), 0..8),
            current in hex_color(),
        ) {
            let themes: Vec<_> = primaries
                .iter()
                .enumerate()
                .map(|(i, primary)| theme_with(&format!("theme-{i}"), primary))
                .collect();

            let resolved = resolve_active_id(&light_with_primary(&current), &themes);

            match themes.iter().position(|t| t.color_tokens.light.primary == current) {
                Some(first) => {
                    prop_assert_eq!(resolved, themes[first].id.as_str());
                }
                None => {
                    prop_assert_eq!(resolved, FALLBACK_THEME_ID);
                }
            }
            prop_assert!(resolved == FALLBACK_THEME_ID || themes.iter().any(|t| t.id == resolved));
        }

        #[test]
        fn resolution_ignores_non_primary_slots(
            background in hex_color(),
            border in hex_color(),
        ) {
            let themes = ThemeRegistry::built_in().themes();
            let mut light = light_with_primary("#1E40AF");
            light.background = background;
            light.border = border;
            prop_assert_eq!(resolve_active_id(&light, themes), "ocean-blue");
        }
    }
}
