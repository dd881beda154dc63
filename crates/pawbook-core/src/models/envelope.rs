//! Generic response envelope for list endpoints.

use serde::Deserialize;

/// Wrapper the backend puts around every list payload.
///
/// The top-level `data` array is required; a response without it is a
/// contract violation and fails to decode.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}
