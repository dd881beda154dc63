//! HTTP service for the persons endpoint.

use super::net_err;
use crate::config::{resolve_api_base, NetworkConfig};
use crate::error::{PawbookError, Result};
use crate::models::{ListEnvelope, Person, PersonRecord};
use crate::query::{build_list_url, PersonListParams};
use tracing::{debug, info};

/// Client for `GET /persons`.
pub struct PersonService {
    base_url: String,
    client: reqwest::Client,
}

impl PersonService {
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

    fn persons_url(&self, params: Option<&PersonListParams>) -> Result<String> {
        build_list_url(&format!("{}/persons", self.base_url), params)
    }

    /// Fetch the person list, optionally filtered and paged.
    ///
    /// A query validation failure is returned before any request is sent.
    /// The list is returned in backend order.
    pub async fn get_persons(&self, params: Option<&PersonListParams>) -> Result<Vec<Person>> {
        let url = self.persons_url(params)?;
        debug!("Fetching persons from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to reach persons endpoint at {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(net_err(format!(
                "Persons endpoint returned {}: {}",
                status, body
            )));
        }

        let envelope: ListEnvelope<PersonRecord> =
            response.json().await.map_err(|e| PawbookError::Json {
                message: format!("Failed to parse persons response: {}", e),
                source: None,
            })?;

        let persons: Vec<Person> = envelope.data.into_iter().map(Person::from_record).collect();
        info!("Fetched {} persons", persons.len());
        Ok(persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persons_url_without_params() {
        let service = PersonService::new(Some("http://x"));
        assert_eq!(
            service.persons_url(None).unwrap(),
            "http://x/persons"
        );
    }

    #[test]
    fn test_persons_url_with_filters() {
        let service = PersonService::new(Some("http://x/"));
        let params = PersonListParams {
            width: Some("10".into()),
            height: Some("".into()),
            page_index: Some("1".into()),
        };
        assert_eq!(
            service.persons_url(Some(&params)).unwrap(),
            "http://x/persons?width=10&pageIndex=1"
        );
    }

    #[test]
    fn test_invalid_filter_fails_before_any_request() {
        let service = PersonService::new(Some("http://x"));
        let params = PersonListParams {
            width: Some("wide".into()),
            ..Default::default()
        };
        let err = service.persons_url(Some(&params)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("width"));
    }

    #[tokio::test]
    async fn test_get_persons_surfaces_validation_without_a_request() {
        // Nothing listens on this address; a validation failure must
        // reject before the service ever tries to connect.
        let service = PersonService::new(Some("http://127.0.0.1:9"));
        let params = PersonListParams {
            height: Some("-5".into()),
            ..Default::default()
        };
        let err = service.get_persons(Some(&params)).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("height"));
    }
}
