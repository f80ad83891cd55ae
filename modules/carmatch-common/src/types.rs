use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Car body types. Wire form is SCREAMING_SNAKE_CASE, matching the
/// catalog database and the values the model is instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarType {
    Sedan,
    Suv,
    Hatchback,
    Coupe,
    Convertible,
    Pickup,
    Van,
    Wagon,
    Crossover,
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transmission {
    Automatic,
    Manual,
}

// =============================================================================
// Catalog record
// =============================================================================

/// A full catalog listing as stored by the marketplace. The search
/// pipeline projects this down to a `CarSummary` before prompting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub car_type: CarType,
    pub year: u16,
    pub mileage: u32,
    pub price: f64,
    pub description: String,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub location: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
}
