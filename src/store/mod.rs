//! # Item Store
//!
//! Persistence for the `items` table.
//!
//! Handlers never talk to the database directly; they receive an [`ItemStore`]
//! at router construction. [`PgItemStore`] is the production implementation,
//! [`InMemoryItemStore`] backs the HTTP tests.

mod config;
mod errors;
mod item;
mod memory;
mod postgres;

use std::future::Future;

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use item::{Item, ItemId, ItemPayload};
pub use memory::InMemoryItemStore;
pub use postgres::PgItemStore;

/// Operations on the items table.
///
/// Every method maps to exactly one statement. Update and delete perform no
/// existence check and report the number of affected rows instead.
pub trait ItemStore: Clone + Send + Sync + 'static {
    /// Insert a new item and return it with its assigned id
    fn create(&self, payload: &ItemPayload) -> impl Future<Output = StoreResult<Item>> + Send;

    /// All items, ordered by id
    fn list(&self) -> impl Future<Output = StoreResult<Vec<Item>>> + Send;

    /// A single item, or `None` when no row has this id
    fn get(&self, id: ItemId) -> impl Future<Output = StoreResult<Option<Item>>> + Send;

    /// Replace name, description and price of the item with this id
    fn update(
        &self,
        id: ItemId,
        payload: &ItemPayload,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Remove the item with this id
    fn delete(&self, id: ItemId) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Check that the store is reachable
    fn ping(&self) -> impl Future<Output = StoreResult<()>> + Send;
}
