//! Theme system for consistent UI colors across dark and light modes.
//!
//! The palette applied at any moment is a pure function of the persisted
//! [`ThemePreference`], so toggling twice always lands back on the exact
//! same colors.

use ratatui::style::Color;

use crate::config::ThemePreference;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, disabled items, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,

    // Decoration
    /// Color of the decorative hero particles
    pub particle: Color,
}

impl Theme {
    /// Returns the theme matching a persisted preference.
    ///
    /// Applying the same preference twice yields an identical theme, so
    /// re-applying on refresh is harmless.
    #[must_use]
    pub const fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    ///
    /// # Color Choices
    /// - Uses bright colors (Cyan, Yellow) for UI chrome
    /// - White text on black background for maximum contrast
    /// - Semantic colors: Green for success, Red for errors
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,

            particle: Color::Rgb(13, 110, 253),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// # Color Choices
    /// - Uses darker colors for text and UI elements
    /// - Black text on white background for maximum readability
    /// - Adjusted accent colors for visibility on light backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0), // Orange-brown for warnings

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),

            particle: Color::Rgb(13, 110, 253),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_preference(ThemePreference::default())
    }
}

/// Glyph shown on the theme toggle for a given preference.
///
/// Dark mode shows the sun (toggling goes to light), light mode shows the
/// moon, mirroring the usual sun/moon toggle convention.
#[must_use]
pub const fn toggle_icon(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "☾",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.error, Color::Red);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.primary, Color::Blue);
        // Verify accent is not yellow (too bright for light bg)
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_from_preference() {
        assert_eq!(Theme::from_preference(ThemePreference::Dark), Theme::dark());
        assert_eq!(
            Theme::from_preference(ThemePreference::Light),
            Theme::light()
        );
    }

    #[test]
    fn test_default_theme_is_dark() {
        // Absent preference implies dark
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_reapplying_preference_is_idempotent() {
        let first = Theme::from_preference(ThemePreference::Light);
        let second = Theme::from_preference(ThemePreference::Light);
        assert_eq!(first, second);
    }

    #[test]
    fn test_theme_contrast() {
        let dark = Theme::dark();
        // Dark theme should have light text on dark background
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        // Light theme should have dark text on light background
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
    }

    #[test]
    fn test_toggle_icon_pairs() {
        // Dark mode offers the sun, light mode offers the moon
        assert_eq!(toggle_icon(ThemePreference::Dark), "☀");
        assert_eq!(toggle_icon(ThemePreference::Light), "☾");
    }

    #[test]
    fn test_semantic_colors_present() {
        let theme = Theme::dark();
        // Verify all semantic colors are defined
        assert_ne!(theme.success, theme.error);
        assert_ne!(theme.primary, theme.accent);
        assert_ne!(theme.text, theme.text_muted);
    }
}
