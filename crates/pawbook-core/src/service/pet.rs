//! HTTP service for the pets sub-endpoint.

use super::net_err;
use crate::config::{resolve_api_base, NetworkConfig};
use crate::error::{PawbookError, Result};
use crate::models::{ListEnvelope, Person, Pet, PetRecord};
use tracing::{debug, info};

/// Client for `GET /persons/{id}/pets`.
pub struct PetService {
    base_url: String,
    client: reqwest::Client,
}

impl PetService {
    /// Create a new service targeting the given base URL.
    ///
    /// If `base_url` is `None`, falls back to `PAWBOOK_API_BASE` or the
    /// local default.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = resolve_api_base(base_url);
        let client = reqwest::Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .expect("failed to build reqwest client");

        Self { base_url, client }
    }

    /// The resolved backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Missing person collapses to an empty id segment (`persons//pets`),
    // which the backend answers with 404 like any unknown person.
    fn pets_url(&self, person: Option<&Person>) -> String {
        let id = person.map(|p| p.id.to_string()).unwrap_or_default();
        format!("{}/persons/{}/pets", self.base_url, id)
    }

    /// Fetch the pets owned by `person`. Takes no query parameters.
    pub async fn get_pets(&self, person: Option<&Person>) -> Result<Vec<Pet>> {
        let url = self.pets_url(person);
        debug!("Fetching pets from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to reach pets endpoint at {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(net_err(format!(
                "Pets endpoint returned {}: {}",
                status, body
            )));
        }

        let envelope: ListEnvelope<PetRecord> =
            response.json().await.map_err(|e| PawbookError::Json {
                message: format!("Failed to parse pets response: {}", e),
                source: None,
            })?;

        let pets: Vec<Pet> = envelope.data.into_iter().map(Pet::from_record).collect();
        info!("Fetched {} pets", pets.len());
        Ok(pets)
    }
}
