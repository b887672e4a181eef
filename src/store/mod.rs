//! # Inventory Store
//!
//! The relational table `inventory(id, item_name, quantity)` and the
//! operations the request handlers run against it.
//!
//! The service-facing seam is the [`InventoryStore`] trait. [`PgStore`] is
//! the production implementation; [`MemoryStore`] backs the HTTP contract
//! tests.

mod memory;
mod postgres;
pub mod retry;

pub use memory::MemoryStore;
pub use postgres::{PgStore, PgStoreConfig};
pub use retry::RetryPolicy;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Assigned by the store on creation, immutable, ascending.
    pub id: i64,
    /// Set at creation, never updated in place. Re-adding the same name
    /// creates a new row rather than merging quantities.
    pub item_name: String,
    pub quantity: i64,
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection could not be established after bounded retries. Fatal at
    /// startup paths; the process is expected to exit and be restarted by
    /// external supervision.
    #[error("store unavailable after {attempts} attempts: {source}")]
    Unavailable {
        attempts: u32,
        source: tokio_postgres::Error,
    },

    /// A statement failed after the connection was established.
    #[error("store error: {0}")]
    Backend(#[from] tokio_postgres::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Operations on the inventory table.
///
/// Every call is self-contained: implementations acquire whatever resources
/// they need, execute, and release them on all exit paths. No state is
/// carried between calls.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Insert a new row with the given name and quantity.
    async fn add_item(&self, item_name: &str, quantity: i64) -> StoreResult<()>;

    /// Decrement the row's quantity by 1, then delete it if the quantity
    /// reached zero or below. Both statements run in one transaction.
    /// A no-op (still `Ok`) when no row matches `id`.
    async fn remove_one(&self, id: i64) -> StoreResult<()>;

    /// Delete the row matching `id` regardless of its quantity.
    /// A no-op (still `Ok`) when no row matches.
    async fn delete_item(&self, id: i64) -> StoreResult<()>;

    /// All rows, ordered by `id` ascending.
    async fn report(&self) -> StoreResult<Vec<InventoryItem>>;
}
