// Test doubles for the two trait boundaries:
// - MockModel (TextGenerator) — canned response or canned failure
// - InMemoryCatalog / FailingCatalog (CatalogReader)
//
// Plus helpers for constructing CarListing fixtures. No network, no
// database: pipeline tests run deterministically.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use carmatch_common::{CarListing, CarType, FuelType, Transmission};
use gemini_client::{Message, TextGenerator};

// ---------------------------------------------------------------------------
// MockModel
// ---------------------------------------------------------------------------

/// Deterministic TextGenerator double.
pub struct MockModel {
    response: Result<String, String>,
}

impl MockModel {
    /// Always replies with `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
        }
    }

    /// Always fails with `message`, as an opaque provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for MockModel {
    async fn generate_text(&self, _messages: &[Message]) -> Result<String> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow!("{message}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog doubles
// ---------------------------------------------------------------------------

/// In-memory CatalogReader returning a fixed set of listings.
pub struct InMemoryCatalog {
    cars: Vec<CarListing>,
}

impl InMemoryCatalog {
    pub fn new(cars: Vec<CarListing>) -> Self {
        Self { cars }
    }
}

#[async_trait]
impl crate::catalog::CatalogReader for InMemoryCatalog {
    async fn all_cars(&self) -> Result<Vec<CarListing>> {
        Ok(self.cars.clone())
    }
}

/// CatalogReader whose read always fails.
pub struct FailingCatalog;

#[async_trait]
impl crate::catalog::CatalogReader for FailingCatalog {
    async fn all_cars(&self) -> Result<Vec<CarListing>> {
        Err(anyhow!("catalog unavailable"))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A plausible listing with the given identity fields filled in.
pub fn listing(id: &str, name: &str, car_type: CarType, colors: &[&str]) -> CarListing {
    CarListing {
        id: id.to_string(),
        name: name.to_string(),
        brand: name.split_whitespace().next().unwrap_or(name).to_string(),
        car_type,
        year: 2021,
        mileage: 32000,
        price: 24500.0,
        description: format!("{name} in good condition with full service history."),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        images: vec![format!("{id}-front.jpg")],
        features: vec!["Backup camera".to_string()],
        location: "Austin, TX".to_string(),
        fuel_type: FuelType::Petrol,
        transmission: Transmission::Automatic,
    }
}
