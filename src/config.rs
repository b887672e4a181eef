//! Service configuration
//!
//! Read once at startup from the environment. Defaults:
//!
//! | Variable            | Default          |
//! |---------------------|------------------|
//! | `DB_HOST`           | `db`             |
//! | `POSTGRES_DB`       | `inventory_db`   |
//! | `POSTGRES_USER`     | `admin`          |
//! | `POSTGRES_PASSWORD` | `admin_password` |
//! | `HTTP_HOST`         | `0.0.0.0`        |
//! | `HTTP_PORT`         | `8000`           |

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::store::{PgStoreConfig, RetryPolicy};

/// Top-level configuration for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub store: PgStoreConfig,

    #[serde(default)]
    pub retry: RetryPolicy,
}

impl ServiceConfig {
    /// Load configuration from environment variables, with documented
    /// defaults for every value. Retry parameters are fixed operational
    /// constants, not environment-driven.
    pub fn from_env() -> Self {
        Self {
            http: HttpServerConfig::from_env(),
            store: PgStoreConfig::from_env(),
            retry: RetryPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.store.host, "db");
        assert_eq!(config.retry.attempts, 10);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: ServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.store.dbname, "inventory_db");
        assert_eq!(config.http.host, "0.0.0.0");
    }
}
