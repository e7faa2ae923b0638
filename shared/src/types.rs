//! API request and response types

use serde::{Deserialize, Serialize};

/// BMI calculation request
///
/// The four measurement fields are raw text, exactly as typed into the
/// form. Clients configured for imperial units may set `height_unit` /
/// `weight_unit`; values are converted to SI after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub gender: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    /// Unit of the height value (cm, m, in); defaults to cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_unit: Option<String>,
    /// Unit of the weight value (kg, lbs); defaults to kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
}

/// BMI calculation response, the shape the result card renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI value rounded to one decimal place
    pub bmi: f64,
    /// Category label, e.g. "Peso normal"
    pub category: String,
    /// Display color for the category
    pub color: String,
}

/// Form validation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    /// Display labels of the fields that failed, in form order
    pub invalid_fields: Vec<String>,
}

/// One row of the classification table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
    pub color: String,
    /// Lower bound of the category's BMI range (inclusive)
    pub min: f64,
    /// Upper bound (exclusive); absent for the open-ended top category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}
