//! Pawbook app - view-model layer for the person/pet directory UI.
//!
//! Sits between the `pawbook` data layer and whatever component library
//! renders the page. The [`Home`] state machine owns list, pagination,
//! filter, and modal state; [`render`] holds the props it hands to the
//! rendering boundary; [`directory`] is the backend seam.
//!
//! # Modules
//!
//! - `directory` - the `DirectoryApi` trait and its REST implementation
//! - `home` - the `Home` state machine
//! - `render` - card and modal props

pub mod directory;
pub mod home;
pub mod render;

// Re-export commonly used types
pub use directory::{DirectoryApi, RestDirectory};
pub use home::{DetailVariant, FilterField, Home};
pub use render::{CardProps, CardStat, DetailModal, SelectedImage};

// Re-export pawbook-core types that are commonly needed with the app layer
pub use pawbook::{PawbookError, Person, PersonListParams, Pet, Result};
