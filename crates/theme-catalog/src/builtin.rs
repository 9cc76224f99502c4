//! Compiled-in theme catalog
//!
//! Catalog order is significant for active-theme resolution, so new themes
//! should be appended rather than inserted.

use crate::color::{ColorTokenSet, ColorTokens};
use crate::registry::ThemeDescriptor;

/// Author recorded on every built-in theme
pub const BUILT_IN_AUTHOR: &str = "NeutralPress";

/// Version recorded on every built-in theme
pub const BUILT_IN_VERSION: &str = "1.0.0";

/// Raw token values in slot order:
/// background, foreground, primary, primary-foreground, secondary,
/// secondary-foreground, muted, muted-foreground, accent, accent-foreground, border
type Palette = [&'static str; 11];

fn tokens(palette: Palette) -> ColorTokens {
    let [background, foreground, primary, primary_foreground, secondary, secondary_foreground, muted, muted_foreground, accent, accent_foreground, border] =
        palette.map(str::to_string);
    ColorTokens {
        background,
        foreground,
        primary,
        primary_foreground,
        secondary,
        secondary_foreground,
        muted,
        muted_foreground,
        accent,
        accent_foreground,
        border,
    }
}

fn theme(id: &str, name: &str, description: &str, light: Palette, dark: Palette) -> ThemeDescriptor {
    ThemeDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        version: BUILT_IN_VERSION.to_string(),
        author: BUILT_IN_AUTHOR.to_string(),
        description: description.to_string(),
        color_tokens: ColorTokenSet {
            light: tokens(light),
            dark: tokens(dark),
        },
    }
}

/// Build the built-in catalog in display order
pub fn built_in_themes() -> Vec<ThemeDescriptor> {
    vec![
        theme(
            "neutral-default",
            "Neutral",
            "The default NeutralPress look: quiet grays that let content lead.",
            [
                "#FFFFFF", "#0A0A0A", "#171717", "#FAFAFA", "#F5F5F5", "#171717",
                "#F5F5F5", "#737373", "#F5F5F5", "#171717", "#E5E5E5",
            ],
            [
                "#0A0A0A", "#FAFAFA", "#FAFAFA", "#171717", "#262626", "#FAFAFA",
                "#262626", "#A3A3A3", "#262626", "#FAFAFA", "#262626",
            ],
        ),
        theme(
            "ocean-blue",
            "Ocean Blue",
            "Deep sea blues with crisp white surfaces.",
            [
                "#FFFFFF", "#0F172A", "#1E40AF", "#EFF6FF", "#E0F2FE", "#0C4A6E",
                "#F1F5F9", "#64748B", "#DBEAFE", "#1E3A8A", "#E2E8F0",
            ],
            [
                "#020617", "#F8FAFC", "#60A5FA", "#0F172A", "#1E293B", "#E0F2FE",
                "#1E293B", "#94A3B8", "#1E3A8A", "#DBEAFE", "#1E293B",
            ],
        ),
        theme(
            "forest-green",
            "Forest Green",
            "Calm evergreen tones for a natural reading experience.",
            [
                "#FCFDFC", "#052E16", "#166534", "#F0FDF4", "#DCFCE7", "#14532D",
                "#F1F5F1", "#5F6F63", "#D1FAE5", "#064E3B", "#DDE5DE",
            ],
            [
                "#07140C", "#ECFDF5", "#4ADE80", "#052E16", "#14291C", "#DCFCE7",
                "#14291C", "#8FA898", "#064E3B", "#D1FAE5", "#1C3325",
            ],
        ),
        theme(
            "sunset-orange",
            "Sunset Orange",
            "Warm oranges inspired by the last light of the day.",
            [
                "#FFFCFA", "#1C0F07", "#C2410C", "#FFF7ED", "#FFEDD5", "#7C2D12",
                "#FAF5F0", "#78716C", "#FED7AA", "#7C2D12", "#F0E4DA",
            ],
            [
                "#140B06", "#FFF7ED", "#FB923C", "#1C0F07", "#2A1A10", "#FFEDD5",
                "#2A1A10", "#A8A29E", "#7C2D12", "#FED7AA", "#33221A",
            ],
        ),
        theme(
            "rose-garden",
            "Rose Garden",
            "Soft rose accents over warm neutral surfaces.",
            [
                "#FFFBFC", "#1F0A10", "#BE123C", "#FFF1F2", "#FFE4E6", "#881337",
                "#FAF3F4", "#7A6A6E", "#FECDD3", "#881337", "#F1DFE2",
            ],
            [
                "#14070B", "#FFF1F2", "#FB7185", "#1F0A10", "#2B1218", "#FFE4E6",
                "#2B1218", "#A89296", "#881337", "#FECDD3", "#35191F",
            ],
        ),
        theme(
            "violet-dusk",
            "Violet Dusk",
            "Twilight purples with a touch of mystery.",
            [
                "#FDFCFF", "#1E1033", "#6D28D9", "#F5F3FF", "#EDE9FE", "#4C1D95",
                "#F5F3F9", "#6E6A7C", "#DDD6FE", "#4C1D95", "#E6E1F0",
            ],
            [
                "#0D0816", "#F5F3FF", "#A78BFA", "#1E1033", "#1E1530", "#EDE9FE",
                "#1E1530", "#9C95AE", "#4C1D95", "#DDD6FE", "#2A2040",
            ],
        ),
        theme(
            "amber-glow",
            "Amber Glow",
            "Golden amber highlights for a bright, friendly site.",
            [
                "#FFFDF7", "#1C1402", "#B45309", "#FFFBEB", "#FEF3C7", "#78350F",
                "#FAF6EC", "#78716C", "#FDE68A", "#78350F", "#EFE6D2",
            ],
            [
                "#120E04", "#FFFBEB", "#FBBF24", "#1C1402", "#2A2210", "#FEF3C7",
                "#2A2210", "#A8A29E", "#78350F", "#FDE68A", "#342A14",
            ],
        ),
        theme(
            "slate-mono",
            "Slate",
            "Cool slate grays for documentation and technical blogs.",
            [
                "#F8FAFC", "#0F172A", "#334155", "#F8FAFC", "#E2E8F0", "#1E293B",
                "#F1F5F9", "#64748B", "#E2E8F0", "#1E293B", "#CBD5E1",
            ],
            [
                "#0B1120", "#E2E8F0", "#94A3B8", "#0F172A", "#1E293B", "#E2E8F0",
                "#1E293B", "#94A3B8", "#334155", "#F1F5F9", "#1E293B",
            ],
        ),
    ]
}
