//! Item record and create/replace payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Item record as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Item {
    /// Assigned by the store on insert, never changes afterwards
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Payload for `POST /items` and `PUT /items/{id}`.
///
/// Carries every business field; `id` is never accepted from the client.
/// A missing `description` decodes as `None`, so a replace clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
