//! Semantic-search pipeline: free-text description → catalog identifier.

use tracing::{debug, info, warn};

use carmatch_common::CarMatchError;
use gemini_client::{Message, TextGenerator};

use crate::catalog::{snapshot, CatalogReader};
use crate::extract::{classify_search_response, SearchOutcome};
use crate::prompts::SEARCH_CAR_PROMPT;

/// One-shot search pipeline. Each invocation re-reads the catalog and
/// makes exactly one model call; nothing is cached between invocations.
pub struct CarSearch<G, C> {
    model: G,
    catalog: C,
}

impl<G: TextGenerator, C: CatalogReader> CarSearch<G, C> {
    pub fn new(model: G, catalog: C) -> Self {
        Self { model, catalog }
    }

    /// Find the single best-matching listing for `description`.
    ///
    /// Returns the listing's identifier, `Err(NotFound)` when the model
    /// reports no suitable match, or a system error. A returned identifier
    /// is guaranteed to exist in the catalog snapshot used for this call.
    pub async fn search(&self, description: &str) -> Result<String, CarMatchError> {
        let cars = self
            .catalog
            .all_cars()
            .await
            .map_err(|e| CarMatchError::Storage(e.to_string()))?;
        let snapshot = snapshot(&cars);

        let list_json = serde_json::to_string(&snapshot)
            .map_err(|e| CarMatchError::Storage(e.to_string()))?;

        let messages = [
            Message::assistant(SEARCH_CAR_PROMPT),
            Message::assistant(format!("The car list is: {list_json}")),
            Message::user(description),
        ];

        debug!(candidates = snapshot.len(), "Requesting car search");

        let text = self
            .model
            .generate_text(&messages)
            .await
            .map_err(|e| CarMatchError::ModelInvocation(e.to_string()))?;

        match classify_search_response(&text) {
            SearchOutcome::NotFound => {
                info!(description, "Search found no matching car");
                Err(CarMatchError::NotFound)
            }
            SearchOutcome::Found(id) => {
                // The model must not invent identifiers.
                if !snapshot.iter().any(|car| car.id == id) {
                    warn!(id, "Model returned an identifier outside the snapshot");
                    return Err(CarMatchError::Extraction(format!(
                        "model returned identifier {id:?} not present in the catalog snapshot"
                    )));
                }
                info!(id, "Search matched a car");
                Ok(id)
            }
        }
    }
}
