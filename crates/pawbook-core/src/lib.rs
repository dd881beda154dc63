//! Pawbook core - headless data layer for the person/pet directory.
//!
//! This crate owns everything below the rendering boundary: configuration,
//! the wire records and mapped models, query-string construction, and the
//! two HTTP services. It has no UI state; see the `pawbook-app` crate for
//! the view-model.
//!
//! # Example
//!
//! ```rust,ignore
//! use pawbook::{PersonListParams, PersonService};
//!
//! #[tokio::main]
//! async fn main() -> pawbook::Result<()> {
//!     let service = PersonService::new(None);
//!
//!     // First page, filtered to 200px-wide images
//!     let params = PersonListParams {
//!         width: Some("200".into()),
//!         ..Default::default()
//!     };
//!     let persons = service.get_persons(Some(&params)).await?;
//!     println!("Found {} persons", persons.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod service;

// Re-export commonly used types
pub use error::{PawbookError, Result};
pub use models::{ListEnvelope, OwnerRef, PartnerRef, Person, PersonRecord, Pet, PetRecord};
pub use query::{build_list_url, PersonListParams};
pub use service::{PersonService, PetService};
