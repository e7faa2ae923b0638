//! BMI calculation API routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use bmi_assistant_shared::bmi::{calculate_bmi_result, BmiCategory, MeasurementInput};
use bmi_assistant_shared::types::{BmiRequest, BmiResponse, CategoryInfo, ValidateResponse};
use bmi_assistant_shared::units::{HeightUnit, WeightUnit};
use bmi_assistant_shared::validation::{field_display_label, invalid_fields, parse_positive};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/validate", post(validate_entry))
        .route("/categories", get(list_categories))
}

/// Parse height unit from string, defaulting to cm
fn parse_height_unit(unit_str: Option<&str>) -> HeightUnit {
    unit_str
        .and_then(|s| s.parse::<HeightUnit>().ok())
        .unwrap_or(HeightUnit::Cm)
}

/// Parse weight unit from string, defaulting to kg
fn parse_weight_unit(unit_str: Option<&str>) -> WeightUnit {
    unit_str
        .and_then(|s| s.parse::<WeightUnit>().ok())
        .unwrap_or(WeightUnit::Kg)
}

/// The raw-text measurement carried by a request
fn measurement_from(req: &BmiRequest) -> MeasurementInput {
    MeasurementInput {
        gender: req.gender.clone(),
        age: req.age.clone(),
        height: req.height.clone(),
        weight: req.weight.clone(),
    }
}

/// Map a request to its response, or to the list of offending field keys
///
/// Validation runs on the raw text; unit conversion to SI happens after,
/// so a strictly positive value stays strictly positive.
pub(crate) fn build_response(req: &BmiRequest) -> Result<BmiResponse, Vec<&'static str>> {
    let input = measurement_from(req);
    let invalid = invalid_fields(&input);

    match (
        invalid.is_empty(),
        parse_positive(&input.height),
        parse_positive(&input.weight),
    ) {
        (true, Some(height), Some(weight)) => {
            let height_cm = parse_height_unit(req.height_unit.as_deref()).to_cm(height);
            let weight_kg = parse_weight_unit(req.weight_unit.as_deref()).to_kg(weight);
            let result = calculate_bmi_result(weight_kg, height_cm);

            Ok(BmiResponse {
                bmi: result.bmi,
                category: result.label().to_string(),
                color: result.color().to_string(),
            })
        }
        _ => Err(invalid),
    }
}

/// User-facing message for a rejected entry, mirroring the form's alert
fn validation_message(fields: &[&'static str]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| field_display_label(f)).collect();
    format!(
        "Preencha todos os campos corretamente: {}",
        labels.join(", ")
    )
}

/// POST /api/v1/bmi/calculate - Compute a BMI result from a form entry
///
/// Accepts height/weight in any supported unit (defaults to cm/kg) and
/// returns the value, category label and display color.
async fn calculate(Json(req): Json<BmiRequest>) -> Result<Json<BmiResponse>, ApiError> {
    build_response(&req)
        .map(Json)
        .map_err(|fields| ApiError::Validation(validation_message(&fields)))
}

/// POST /api/v1/bmi/validate - Check a form entry without computing
///
/// Lets the client enable/disable its submit action and highlight the
/// fields that still need fixing.
async fn validate_entry(Json(req): Json<BmiRequest>) -> Json<ValidateResponse> {
    let input = measurement_from(&req);
    let invalid: Vec<String> = invalid_fields(&input)
        .iter()
        .map(|f| field_display_label(f).to_string())
        .collect();

    Json(ValidateResponse {
        valid: invalid.is_empty(),
        invalid_fields: invalid,
    })
}

/// GET /api/v1/bmi/categories - The classification table
///
/// Returns every category with its label, color and BMI range so the
/// client can render the legend next to the result card.
async fn list_categories() -> Json<Vec<CategoryInfo>> {
    let categories = BmiCategory::ALL
        .iter()
        .map(|category| {
            let (min, max) = category.range();
            CategoryInfo {
                id: category.id().to_string(),
                label: category.label().to_string(),
                color: category.color().to_string(),
                min,
                max: max.is_finite().then_some(max),
            }
        })
        .collect();

    Json(categories)
}
