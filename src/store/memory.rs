//! In-memory inventory store.
//!
//! Mirrors the PostgreSQL store's semantics (ascending ids, decrement-then-
//! cleanup remove, no-op on absent ids) without a database. Used by the
//! HTTP contract tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{InventoryItem, InventoryStore, StoreResult};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: Vec<InventoryItem>,
}

/// In-memory [`InventoryStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        // Lock poisoning cannot leave the table in a half-applied state:
        // every mutation below completes before the guard drops.
        self.table.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn add_item(&self, item_name: &str, quantity: i64) -> StoreResult<()> {
        let mut table = self.lock();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(InventoryItem {
            id,
            item_name: item_name.to_string(),
            quantity,
        });
        Ok(())
    }

    async fn remove_one(&self, id: i64) -> StoreResult<()> {
        let mut table = self.lock();
        if let Some(row) = table.rows.iter_mut().find(|row| row.id == id) {
            row.quantity -= 1;
        }
        table.rows.retain(|row| row.id != id || row.quantity > 0);
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> StoreResult<()> {
        let mut table = self.lock();
        table.rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn report(&self) -> StoreResult<Vec<InventoryItem>> {
        // Rows are appended in id order and ids are never reused, so the
        // vector is already sorted ascending.
        Ok(self.lock().rows.clone())
    }
}
