//! HTTP services for the Pawbook backend.
//!
//! Thin fetch-and-map layers over the two REST endpoints. Services never
//! retry; every failure surfaces to the caller as an error.

mod person;
mod pet;

pub use person::PersonService;
pub use pet::PetService;

use crate::error::PawbookError;

/// Helper to create a network error.
pub(crate) fn net_err(msg: String) -> PawbookError {
    PawbookError::Network {
        message: msg,
        cause: None,
    }
}
