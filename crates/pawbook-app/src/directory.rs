//! Directory backend trait.

use async_trait::async_trait;
use pawbook::{Person, PersonListParams, PersonService, Pet, PetService, Result};

/// Data source for the directory views.
///
/// The view-model only speaks this trait, so tests can script responses
/// without a backend.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch the person list, optionally filtered and paged.
    async fn get_persons(&self, params: Option<&PersonListParams>) -> Result<Vec<Person>>;

    /// Fetch the pets owned by `person`.
    async fn get_pets(&self, person: Option<&Person>) -> Result<Vec<Pet>>;
}

/// Directory backed by the live REST services.
pub struct RestDirectory {
    persons: PersonService,
    pets: PetService,
}

impl RestDirectory {
    /// Create a directory against the given base URL.
    ///
    /// `None` falls back to `PAWBOOK_API_BASE` or the local default.
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            persons: PersonService::new(base_url),
            pets: PetService::new(base_url),
        }
    }
}

#[async_trait]
impl DirectoryApi for RestDirectory {
    async fn get_persons(&self, params: Option<&PersonListParams>) -> Result<Vec<Person>> {
        self.persons.get_persons(params).await
    }

    async fn get_pets(&self, person: Option<&Person>) -> Result<Vec<Pet>> {
        self.pets.get_pets(person).await
    }
}
