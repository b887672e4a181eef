//! # PostgreSQL store
//!
//! Production [`InventoryStore`] implementation. No pooling: every
//! operation acquires a fresh connection, runs its statements, and drops
//! the client on all exit paths. Consistency is delegated to PostgreSQL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_postgres::{Client, NoTls};
use tracing::error;

use super::retry::{retry_acquire, RetryPolicy};
use super::{InventoryItem, InventoryStore, StoreError, StoreResult};

/// Connection parameters, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PgStoreConfig {
    /// Database host (default: "db")
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database name (default: "inventory_db")
    #[serde(default = "default_db_name")]
    pub dbname: String,

    /// Database user (default: "admin")
    #[serde(default = "default_db_user")]
    pub user: String,

    /// Database password (default: "admin_password")
    #[serde(default = "default_db_password")]
    pub password: String,
}

fn default_db_host() -> String {
    "db".to_string()
}

fn default_db_name() -> String {
    "inventory_db".to_string()
}

fn default_db_user() -> String {
    "admin".to_string()
}

fn default_db_password() -> String {
    "admin_password".to_string()
}

impl Default for PgStoreConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            dbname: default_db_name(),
            user: default_db_user(),
            password: default_db_password(),
        }
    }
}

impl PgStoreConfig {
    /// Read connection parameters from the environment, falling back to
    /// the documented defaults: `DB_HOST`, `POSTGRES_DB`, `POSTGRES_USER`,
    /// `POSTGRES_PASSWORD`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            dbname: std::env::var("POSTGRES_DB").unwrap_or(defaults.dbname),
            user: std::env::var("POSTGRES_USER").unwrap_or(defaults.user),
            password: std::env::var("POSTGRES_PASSWORD").unwrap_or(defaults.password),
        }
    }

    fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        config
    }
}

/// PostgreSQL-backed inventory store.
pub struct PgStore {
    config: PgStoreConfig,
    retry: RetryPolicy,
}

impl PgStore {
    pub fn new(config: PgStoreConfig, retry: RetryPolicy) -> Self {
        Self { config, retry }
    }

    /// Acquire a fresh connection, retrying per the configured policy.
    ///
    /// The connection task is spawned onto the runtime and ends when the
    /// returned client is dropped.
    async fn acquire(&self) -> StoreResult<Client> {
        let pg_config = self.config.pg_config();
        let (client, connection) =
            retry_acquire(self.retry, |_| pg_config.connect(NoTls))
                .await
                .map_err(|source| StoreError::Unavailable {
                    attempts: self.retry.attempts.max(1),
                    source,
                })?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!(error = %e, "database connection task ended with error");
            }
        });
        Ok(client)
    }

    /// Create the inventory table if it does not exist yet. Run once at
    /// startup so a first boot against an empty database is self-contained.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let client = self.acquire().await?;
        client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS inventory (
                    id BIGSERIAL PRIMARY KEY,
                    item_name TEXT NOT NULL,
                    quantity BIGINT NOT NULL
                )",
            )
            .await?;
        Ok(())
    }

    /// Connectivity check: one bounded-retry connect plus `SELECT 1`.
    pub async fn ping(&self) -> StoreResult<()> {
        let client = self.acquire().await?;
        client.simple_query("SELECT 1").await?;
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn add_item(&self, item_name: &str, quantity: i64) -> StoreResult<()> {
        let client = self.acquire().await?;
        client
            .execute(
                "INSERT INTO inventory (item_name, quantity) VALUES ($1, $2)",
                &[&item_name, &quantity],
            )
            .await?;
        Ok(())
    }

    async fn remove_one(&self, id: i64) -> StoreResult<()> {
        let mut client = self.acquire().await?;
        // One transaction around both statements so a concurrent remove or
        // delete on the same row cannot interleave between the decrement
        // and the cleanup delete.
        let tx = client.transaction().await?;
        tx.execute(
            "UPDATE inventory SET quantity = quantity - 1 WHERE id = $1",
            &[&id],
        )
        .await?;
        tx.execute(
            "DELETE FROM inventory WHERE id = $1 AND quantity <= 0",
            &[&id],
        )
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> StoreResult<()> {
        let client = self.acquire().await?;
        client
            .execute("DELETE FROM inventory WHERE id = $1", &[&id])
            .await?;
        Ok(())
    }

    async fn report(&self) -> StoreResult<Vec<InventoryItem>> {
        let client = self.acquire().await?;
        let rows = client
            .query(
                "SELECT id, item_name, quantity FROM inventory ORDER BY id",
                &[],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| InventoryItem {
                id: row.get(0),
                item_name: row.get(1),
                quantity: row.get(2),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PgStoreConfig::default();
        assert_eq!(config.host, "db");
        assert_eq!(config.dbname, "inventory_db");
        assert_eq!(config.user, "admin");
        assert_eq!(config.password, "admin_password");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config: PgStoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.host, "db");

        let config: PgStoreConfig =
            serde_json::from_str(r#"{"host": "localhost"}"#).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.dbname, "inventory_db");
    }
}
