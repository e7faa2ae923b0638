//! Input validation functions
//!
//! Validation helpers for the measurement entry form. The form fields are
//! free text, so everything here is written to never panic on bad input.

use crate::bmi::MeasurementInput;

/// Parse free-text numeric input, keeping only strictly positive values
///
/// Returns `None` for empty strings, non-numeric text, zero, negatives and
/// non-finite values. Surrounding whitespace is tolerated.
pub fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Field keys of an entry that fail validation, in form order
///
/// Empty when the entry is valid; used to point the user at the fields
/// that still need fixing.
pub fn invalid_fields(input: &MeasurementInput) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if input.gender.trim().is_empty() {
        fields.push("gender");
    }
    if parse_positive(&input.age).is_none() {
        fields.push("age");
    }
    if parse_positive(&input.height).is_none() {
        fields.push("height");
    }
    if parse_positive(&input.weight).is_none() {
        fields.push("weight");
    }
    fields
}

/// Map technical field names to the labels shown on the entry form
pub fn field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Sexo",
        "age" => "Idade (anos)",
        "height" => "Altura (cm)",
        "weight" => "Peso (kg)",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_positive_accepts_numeric_text() {
        assert_eq!(parse_positive("70"), Some(70.0));
        assert_eq!(parse_positive("70.5"), Some(70.5));
        assert_eq!(parse_positive(".5"), Some(0.5));
        assert_eq!(parse_positive(" 170 "), Some(170.0));
    }

    #[test]
    fn test_parse_positive_rejects_bad_text() {
        assert_eq!(parse_positive(""), None);
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-5"), None);
        assert_eq!(parse_positive("NaN"), None);
        assert_eq!(parse_positive("inf"), None);
    }

    #[test]
    fn test_invalid_fields_reports_in_form_order() {
        let entry = MeasurementInput {
            gender: String::new(),
            age: "25".to_string(),
            height: "abc".to_string(),
            weight: "0".to_string(),
        };
        assert_eq!(invalid_fields(&entry), vec!["gender", "height", "weight"]);
    }

    #[test]
    fn test_invalid_fields_empty_for_valid_entry() {
        let entry = MeasurementInput {
            gender: "female".to_string(),
            age: "31".to_string(),
            height: "164".to_string(),
            weight: "58".to_string(),
        };
        assert!(invalid_fields(&entry).is_empty());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(field_display_label("gender"), "Sexo");
        assert_eq!(field_display_label("age"), "Idade (anos)");
        assert_eq!(field_display_label("height"), "Altura (cm)");
        assert_eq!(field_display_label("weight"), "Peso (kg)");
        assert_eq!(field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: positive numeric strings always parse
        #[test]
        fn prop_positive_values_parse(value in 0.001f64..10000.0) {
            let parsed = parse_positive(&value.to_string());
            prop_assert!(parsed.is_some());
            prop_assert!((parsed.unwrap() - value).abs() < 1e-9);
        }

        /// Property: non-positive values never parse
        #[test]
        fn prop_non_positive_values_rejected(value in -10000.0f64..=0.0) {
            prop_assert_eq!(parse_positive(&value.to_string()), None);
        }

        /// Property: parsing never panics on arbitrary text
        #[test]
        fn prop_never_panics(text in ".*") {
            let _ = parse_positive(&text);
        }
    }
}
