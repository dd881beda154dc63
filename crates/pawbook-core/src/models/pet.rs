//! Pet record and model.

use serde::{Deserialize, Serialize};

/// Reference to the owning person nested inside a record.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRef {
    pub id: i64,
}

/// A pet exactly as returned by `GET /persons/{id}/pets`.
#[derive(Debug, Clone, Deserialize)]
pub struct PetRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
}

/// A pet as the UI consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    /// Id of the owning person, if any.
    pub owner_id: Option<i64>,
}

impl Pet {
    pub fn new(id: i64, name: impl Into<String>, owner_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
        }
    }

    /// Map a wire record into a model.
    pub fn from_record(record: PetRecord) -> Self {
        let owner_id = record.owner.map(|owner| owner.id);
        Self::new(record.id, record.name, owner_id)
    }
}
