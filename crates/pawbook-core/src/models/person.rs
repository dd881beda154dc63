//! Person record and model.

use crate::config::AppConfig;
use serde::{Deserialize, Serialize};

/// Reference to another person nested inside a record.
///
/// The backend serializes the full partner object; only the id is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerRef {
    pub id: i64,
}

/// A person exactly as returned by `GET /persons`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub partner: Option<PartnerRef>,
}

/// A person as the UI consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Display name, `first_name` and `last_name` joined with a space.
    pub name: String,
    /// Id of the partner, if married. Informational link only.
    pub partner_id: Option<i64>,
    pub avatar: String,
    pub header: String,
}

impl Person {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        partner_id: Option<i64>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let name = format!("{} {}", first_name, last_name);
        Self {
            id,
            first_name,
            last_name,
            name,
            partner_id,
            avatar: AppConfig::DEFAULT_AVATAR_URL.to_string(),
            header: AppConfig::DEFAULT_HEADER_URL.to_string(),
        }
    }

    /// Map a wire record into a model.
    pub fn from_record(record: PersonRecord) -> Self {
        let partner_id = record.partner.map(|partner| partner.id);
        Self::new(record.id, record.first_name, record.last_name, partner_id)
    }

    /// Whether this person has a partner.
    pub fn is_married(&self) -> bool {
        self.partner_id.is_some()
    }
}
