//! Catalog access and the prompt-facing snapshot projection.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use carmatch_common::{CarListing, FuelType, Transmission};

// ---------------------------------------------------------------------------
// CatalogReader — read-only bulk fetch of all listings
// ---------------------------------------------------------------------------

/// The storage collaborator seam. One call per search invocation; a short
/// staleness window against recent writes is acceptable.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn all_cars(&self) -> Result<Vec<CarListing>>;
}

// ---------------------------------------------------------------------------
// CarSummary — the snapshot entry embedded in search prompts
// ---------------------------------------------------------------------------

/// Prompt projection of a listing. Field names and order are fixed across
/// calls so prompts stay stable; `availbleColors` keeps the key the catalog
/// has always used on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSummary {
    pub id: String,
    pub name: String,
    pub year: u16,
    pub mileage: u32,
    pub price: f64,
    pub image: Option<String>,
    pub description: String,
    pub brand: String,
    pub fuel: FuelType,
    pub transmission: Transmission,
    #[serde(rename = "availbleColors")]
    pub available_colors: Vec<String>,
    pub location: String,
    pub features: Vec<String>,
    #[serde(rename = "carType")]
    pub car_type: carmatch_common::CarType,
}

/// Project the full catalog into snapshot form. Pure; no side effects.
pub fn snapshot(cars: &[CarListing]) -> Vec<CarSummary> {
    cars.iter()
        .map(|car| CarSummary {
            id: car.id.clone(),
            name: car.name.clone(),
            year: car.year,
            mileage: car.mileage,
            price: car.price,
            image: car.images.first().cloned(),
            description: car.description.clone(),
            brand: car.brand.clone(),
            fuel: car.fuel_type,
            transmission: car.transmission,
            available_colors: car.colors.clone(),
            location: car.location.clone(),
            features: car.features.clone(),
            car_type: car.car_type,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JsonCatalog — file-backed reader used by the CLI
// ---------------------------------------------------------------------------

/// Reads the catalog from a JSON file holding an array of listings.
pub struct JsonCatalog {
    path: std::path::PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogReader for JsonCatalog {
    async fn all_cars(&self) -> Result<Vec<CarListing>> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::listing;
    use carmatch_common::CarType;

    #[test]
    fn test_snapshot_projects_fixed_fields() {
        let cars = vec![listing("c1", "Toyota RAV4", CarType::Suv, &["red"])];
        let snap = snapshot(&cars);

        assert_eq!(snap.len(), 1);
        let entry = &snap[0];
        assert_eq!(entry.id, "c1");
        assert_eq!(entry.car_type, CarType::Suv);
        assert_eq!(entry.available_colors, vec!["red"]);
        assert_eq!(entry.image.as_deref(), Some("c1-front.jpg"));
    }

    #[test]
    fn test_snapshot_wire_keys_are_stable() {
        let cars = vec![listing("c1", "Toyota RAV4", CarType::Suv, &["red"])];
        let json = serde_json::to_string(&snapshot(&cars)).unwrap();

        assert!(json.contains("\"availbleColors\":[\"red\"]"));
        assert!(json.contains("\"carType\":\"SUV\""));
        assert!(json.contains("\"fuel\":"));
    }

    #[test]
    fn test_snapshot_of_empty_catalog() {
        assert!(snapshot(&[]).is_empty());
    }
}
