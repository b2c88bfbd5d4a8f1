//! Item types

use serde::{Deserialize, Serialize};

/// Primary key of the items table (`SERIAL`)
pub type ItemId = i32;

/// A row of the items table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Item {
    /// Attach an assigned id to a payload
    pub fn from_payload(id: ItemId, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
        }
    }
}

/// Request body of create and update.
///
/// Unknown fields, `id` included, are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
}
