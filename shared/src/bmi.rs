//! Body mass index calculations
//!
//! The calculation engine behind the IMC screen: validates free-text
//! biometric entry and computes a BMI value with its category and display
//! color.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Tolerant Input**: Fields arrive as raw text; bad text is invalid,
//!    never a panic
//! 3. **Type Safety**: Categories are an enum, not loose strings

use crate::validation::parse_positive;
use serde::{Deserialize, Serialize};

// ============================================================================
// Measurement Input
// ============================================================================

/// A self-reported biometric entry, exactly as typed into the form.
///
/// All four fields are raw text: they come from free-text inputs and stay
/// unparsed until [`validate`] accepts them. `gender` and `age` are
/// collected and validated but do not participate in the BMI formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// "male" or "female" (display only)
    pub gender: String,
    /// Age in years (display only)
    pub age: String,
    /// Height in centimeters
    pub height: String,
    /// Weight in kilograms
    pub weight: String,
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Stable identifier, matching the serde representation
    pub fn id(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    /// Get the half-open BMI range [min, max) for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// User-facing label, as shown on the result card
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Abaixo do peso",
            BmiCategory::Normal => "Peso normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obese => "Obesidade",
        }
    }

    /// Display color for this category
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#2196F3",
            BmiCategory::Normal => "#4CAF50",
            BmiCategory::Overweight => "#FF9800",
            BmiCategory::Obese => "#F44336",
        }
    }
}

/// BMI calculation result
///
/// The label and color shown next to the value are derived one-to-one from
/// the category via [`BmiCategory::label`] and [`BmiCategory::color`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, rounded to one decimal place
    pub bmi: f64,
    /// Category of the unrounded value
    pub category: BmiCategory,
}

impl BmiResult {
    /// User-facing label for the result's category
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Display color for the result's category
    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Thresholds are half-open; boundary values belong to the higher category.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Round to one decimal place, half away from zero
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate complete BMI result from SI measurements
///
/// Classification happens on the raw value; rounding is display-only, so a
/// raw BMI of 24.96 reports as 25.0 with category `Normal`.
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> BmiResult {
    let raw = calculate_bmi(weight_kg, height_cm);
    BmiResult {
        bmi: round_to_tenth(raw),
        category: classify_bmi(raw),
    }
}

/// Validation predicate for a measurement entry
///
/// True iff gender is non-empty and age, height and weight each parse to a
/// strictly positive number. Unparsable text counts as "not positive";
/// this function has no failure path.
pub fn validate(input: &MeasurementInput) -> bool {
    !input.gender.trim().is_empty()
        && parse_positive(&input.age).is_some()
        && parse_positive(&input.height).is_some()
        && parse_positive(&input.weight).is_some()
}

/// Compute the BMI result for a measurement entry
///
/// Re-validates defensively: returns `None` exactly when [`validate`]
/// rejects the input.
pub fn compute(input: &MeasurementInput) -> Option<BmiResult> {
    if !validate(input) {
        return None;
    }
    let height_cm = parse_positive(&input.height)?;
    let weight_kg = parse_positive(&input.weight)?;
    Some(calculate_bmi_result(weight_kg, height_cm))
}
