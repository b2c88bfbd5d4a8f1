//! In-memory item store
//!
//! Mirrors the PostgreSQL semantics closely enough to exercise the HTTP layer
//! without a database: ids start at 1, are never reused, and listing is in id
//! order.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::item::{Item, ItemId, ItemPayload};
use super::ItemStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ItemId, Item>,
    last_id: ItemId,
}

/// Item store holding rows in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Table>> {
        self.table
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Table>> {
        self.table
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl ItemStore for InMemoryItemStore {
    async fn create(&self, payload: &ItemPayload) -> StoreResult<Item> {
        let mut table = self.write()?;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("item ids exhausted".to_string()))?;
        let item = Item::from_payload(table.last_id, payload.clone());
        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn update(&self, id: ItemId, payload: &ItemPayload) -> StoreResult<u64> {
        let mut table = self.write()?;
        match table.rows.get_mut(&id) {
            Some(item) => {
                *item = Item::from_payload(id, payload.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ItemId) -> StoreResult<u64> {
        let mut table = self.write()?;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }
}
