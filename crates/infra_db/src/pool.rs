//! PostgreSQL pool and schema migrations
//!
//! The server builds a [`DatabaseConfig`] from its `API_DB_*` settings,
//! opens the pool with [`create_pool`] and brings the schema up to date with
//! [`run_migrations`] before it starts serving.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::error::DatabaseError;

pub type DatabasePool = PgPool;

/// Pool settings for the record store
///
/// ```rust
/// use infra_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("postgres://localhost/verzekeringen")
///     .max_connections(20)
///     .acquire_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    /// Upper bound of open connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// How long a request waits for a free connection before failing
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Settings for `url` with a pool of 2 to 10 connections and a 30s wait
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the idle floor; capped at `max_connections` when the pool opens
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .acquire_timeout(self.acquire_timeout)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("postgres://localhost/verzekeringen")
    }
}

/// Opens the connection pool
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if no connection can be made
/// within the acquire timeout
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "Opening database pool"
    );

    config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Applies the migrations embedded from the workspace `migrations/` directory
///
/// Migrations already recorded in `_sqlx_migrations` are skipped.
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::default();
        assert!(config.url.ends_with("/verzekeringen"));
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_pool_options_follow_config() {
        let options = DatabaseConfig::new("postgres://test")
            .max_connections(4)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .pool_options();

        assert_eq!(options.get_max_connections(), 4);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_min_connections_capped_at_max() {
        let options = DatabaseConfig::new("postgres://test")
            .max_connections(3)
            .min_connections(8)
            .pool_options();

        assert_eq!(options.get_min_connections(), 3);
    }
}
