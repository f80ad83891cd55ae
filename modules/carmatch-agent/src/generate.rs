//! Listing-generation pipeline: car name + schema → raw car object.

use schemars::schema_for;
use serde_json::{Map, Value};
use tracing::{debug, info};

use carmatch_common::CarMatchError;
use gemini_client::{Message, TextGenerator};

use crate::extract::extract_json_object;
use crate::prompts::GENERATE_CAR_PROMPT;
use crate::validate::CarDraft;

/// One-shot generation pipeline. Holds the injected model and the JSON
/// schema embedded in every prompt; no state survives an invocation.
///
/// The returned object is NOT validated against the schema here — that is
/// the caller's responsibility (see [`crate::validate::validate_draft`]),
/// which keeps this pipeline schema-agnostic.
pub struct CarGenerator<G> {
    model: G,
    schema: Value,
}

impl<G: TextGenerator> CarGenerator<G> {
    /// Pipeline targeting the standard add-car schema.
    pub fn new(model: G) -> Self {
        let schema =
            serde_json::to_value(schema_for!(CarDraft)).expect("car draft schema serializes");
        Self::with_schema(model, schema)
    }

    /// Pipeline targeting an arbitrary JSON schema.
    pub fn with_schema(model: G, schema: Value) -> Self {
        Self { model, schema }
    }

    /// Generate a car object for `car_name`. Returns the first JSON object
    /// found in the model's reply, as-is.
    pub async fn generate(&self, car_name: &str) -> Result<Map<String, Value>, CarMatchError> {
        if car_name.trim().is_empty() {
            return Err(CarMatchError::Validation(
                "car name must not be empty".to_string(),
            ));
        }

        let messages = [
            Message::assistant(GENERATE_CAR_PROMPT),
            Message::assistant(format!("The car schema is: {}", self.schema)),
            Message::user(format!("The car name is {car_name}")),
        ];

        debug!(car_name, "Requesting car generation");

        let text = self
            .model
            .generate_text(&messages)
            .await
            .map_err(|e| CarMatchError::ModelInvocation(e.to_string()))?;

        let object = extract_json_object(&text)?;

        info!(car_name, fields = object.len(), "Generated car draft");
        Ok(object)
    }
}
