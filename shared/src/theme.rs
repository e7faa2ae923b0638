//! App theme palettes
//!
//! Material-style color roles for the light and dark themes. The front-end
//! pulls these through the wasm bindings so the palette lives in one place.

use serde::Serialize;

/// Color roles used by the app's screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub primary_container: &'static str,
    pub on_primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_variant: &'static str,
    pub on_surface: &'static str,
    pub on_surface_variant: &'static str,
    pub outline: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

/// Light theme palette
pub const LIGHT: ThemeColors = ThemeColors {
    primary: "#6750A4",
    primary_container: "#EADDFF",
    on_primary: "#FFFFFF",
    background: "#FFFBFE",
    surface: "#FFFFFF",
    surface_variant: "#F7F2FA",
    on_surface: "#1C1B1F",
    on_surface_variant: "#49454F",
    outline: "#79747E",
    error: "#F44336",
    success: "#4CAF50",
    warning: "#FF9800",
    info: "#2196F3",
};

/// Dark theme palette
pub const DARK: ThemeColors = ThemeColors {
    primary: "#D0BCFF",
    primary_container: "#4F378B",
    on_primary: "#381E72",
    background: "#1C1B1F",
    surface: "#2B2930",
    surface_variant: "#49454F",
    on_surface: "#E6E1E5",
    on_surface_variant: "#CAC4D0",
    outline: "#938F99",
    error: "#F2B8B5",
    success: "#81C784",
    warning: "#FFB74D",
    info: "#64B5F6",
};

impl ThemeColors {
    /// Palette for the requested mode
    pub fn for_mode(dark_mode: bool) -> &'static ThemeColors {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;

    #[test]
    fn test_mode_selection() {
        assert_eq!(ThemeColors::for_mode(false), &LIGHT);
        assert_eq!(ThemeColors::for_mode(true), &DARK);
    }

    #[test]
    fn test_category_colors_match_light_semantic_colors() {
        // The result card colors are the light palette's semantic colors
        assert_eq!(BmiCategory::Underweight.color(), LIGHT.info);
        assert_eq!(BmiCategory::Normal.color(), LIGHT.success);
        assert_eq!(BmiCategory::Overweight.color(), LIGHT.warning);
        assert_eq!(BmiCategory::Obese.color(), LIGHT.error);
    }
}
