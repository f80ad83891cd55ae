//! Caller-side validation of generated car objects.
//!
//! The generation pipeline hands back a raw JSON mapping; nothing is
//! persisted until it passes this step. Validation is deliberately outside
//! the pipeline so the pipeline stays schema-agnostic.

use chrono::Datelike;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use carmatch_common::{CarMatchError, CarType, FuelType, Transmission};

/// The typed target of the generation schema. `schemars` derives the JSON
/// schema that is embedded in the generation prompt, so field names here
/// are the contract the model is asked to fill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDraft {
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub car_type: CarType,
    pub year: u16,
    pub mileage: u32,
    pub colors: Vec<String>,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub transmission: Transmission,
    pub features: Vec<String>,
    pub location: String,
    pub fuel_type: FuelType,

    // Specification details
    pub engine_capacity: Option<f64>,
    pub doors: Option<u32>,
    pub seats: Option<u32>,
    pub top_speed: Option<u32>,
    pub acceleration: Option<f64>,
    pub horsepower: Option<u32>,
    pub torque: Option<u32>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Validate a raw generated object against the add-car constraints.
///
/// Every failed constraint is reported, not just the first.
pub fn validate_draft(object: Map<String, Value>) -> Result<CarDraft, CarMatchError> {
    let draft: CarDraft = serde_json::from_value(Value::Object(object))
        .map_err(|e| CarMatchError::Validation(e.to_string()))?;

    let mut failures = Vec::new();

    if draft.name.trim().len() < 3 {
        failures.push("name must be at least 3 characters");
    }
    if draft.brand.trim().is_empty() {
        failures.push("brand is required");
    }
    let max_year = (chrono::Utc::now().year() + 1) as u16;
    if draft.year < 1900 || draft.year > max_year {
        failures.push("year is out of range");
    }
    if draft.colors.is_empty() {
        failures.push("at least one color is required");
    }
    if draft.price <= 0.0 {
        failures.push("price must be positive");
    }
    if draft.description.trim().len() < 20 {
        failures.push("description must be at least 20 characters");
    }
    if draft.images.is_empty() {
        failures.push("at least one image is required");
    }
    if draft.features.is_empty() {
        failures.push("at least one feature is required");
    }
    if draft.location.trim().len() < 2 {
        failures.push("location is required");
    }

    let positive_f64 = [
        ("engineCapacity", draft.engine_capacity),
        ("acceleration", draft.acceleration),
        ("length", draft.length),
        ("width", draft.width),
        ("height", draft.height),
        ("weight", draft.weight),
    ];
    for (field, value) in positive_f64 {
        if matches!(value, Some(v) if v <= 0.0) {
            failures.push(field);
        }
    }
    let positive_u32 = [
        ("doors", draft.doors),
        ("seats", draft.seats),
        ("topSpeed", draft.top_speed),
        ("horsepower", draft.horsepower),
        ("torque", draft.torque),
    ];
    for (field, value) in positive_u32 {
        if matches!(value, Some(0)) {
            failures.push(field);
        }
    }

    if failures.is_empty() {
        Ok(draft)
    } else {
        Err(CarMatchError::Validation(failures.join("; ")))
    }
}
