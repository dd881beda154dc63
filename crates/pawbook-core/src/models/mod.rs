//! Data models for Pawbook.
//!
//! Two layers per entity: the wire record exactly as the backend returns it,
//! and the mapped model the UI consumes. Records are built fresh from every
//! response; models are never mutated after construction.

mod envelope;
mod person;
mod pet;

pub use envelope::*;
pub use person::*;
pub use pet::*;
