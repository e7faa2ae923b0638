//! BMI Assistant WASM Module
//!
//! This crate provides WebAssembly bindings so the mobile/web front-end
//! runs the same calculation engine as the backend instead of
//! reimplementing the formula in JS.

use bmi_assistant_shared::bmi::{self, MeasurementInput};
use bmi_assistant_shared::theme::ThemeColors;
use bmi_assistant_shared::types::BmiResponse;
use wasm_bindgen::prelude::*;

fn measurement(gender: &str, age: &str, height: &str, weight: &str) -> MeasurementInput {
    MeasurementInput {
        gender: gender.to_string(),
        age: age.to_string(),
        height: height.to_string(),
        weight: weight.to_string(),
    }
}

/// Check whether a form entry is complete and numeric
///
/// Drives the enabled state of the calculate button.
#[wasm_bindgen]
pub fn is_form_valid(gender: &str, age: &str, height: &str, weight: &str) -> bool {
    bmi::validate(&measurement(gender, age, height, weight))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    bmi::calculate_bmi(weight_kg, height_cm)
}

/// Compute the full result for a form entry as JSON
///
/// Returns `{bmi, category, color}` ready for the result card, or `None`
/// when the entry does not validate.
#[wasm_bindgen]
pub fn compute_bmi_json(gender: &str, age: &str, height: &str, weight: &str) -> Option<String> {
    let result = bmi::compute(&measurement(gender, age, height, weight))?;
    let response = BmiResponse {
        bmi: result.bmi,
        category: result.label().to_string(),
        color: result.color().to_string(),
    };
    serde_json::to_string(&response).ok()
}

/// Theme palette for the requested mode as JSON
#[wasm_bindgen]
pub fn theme_colors_json(dark_mode: bool) -> String {
    serde_json::to_string(ThemeColors::for_mode(dark_mode))
        .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
    }

    #[test]
    fn test_bmi_zero_height_guard() {
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_form_validity() {
        assert!(is_form_valid("male", "25", "170", "70"));
        assert!(!is_form_valid("male", "25", "abc", "70"));
        assert!(!is_form_valid("", "25", "170", "70"));
    }

    #[test]
    fn test_compute_json_shape() {
        let json = compute_bmi_json("male", "25", "170", "70").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bmi"], 24.2);
        assert_eq!(value["category"], "Peso normal");
        assert_eq!(value["color"], "#4CAF50");
    }

    #[test]
    fn test_compute_json_invalid_entry() {
        assert!(compute_bmi_json("male", "0", "170", "70").is_none());
    }

    #[test]
    fn test_theme_json() {
        let light: serde_json::Value =
            serde_json::from_str(&theme_colors_json(false)).unwrap();
        let dark: serde_json::Value = serde_json::from_str(&theme_colors_json(true)).unwrap();
        assert_eq!(light["success"], "#4CAF50");
        assert_eq!(dark["background"], "#1C1B1F");
    }
}
