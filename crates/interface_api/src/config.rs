//! API configuration

use std::time::Duration;

use serde::Deserialize;

use infra_db::DatabaseConfig;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables; every field has a
/// default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// Connections kept open while idle
    pub db_min_connections: u32,
    /// Seconds a request waits for a free connection
    pub db_acquire_timeout_secs: u64,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/verzekeringen".to_string(),
            db_max_connections: 10,
            db_min_connections: 2,
            db_acquire_timeout_secs: 30,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// `API_DATABASE_URL` takes precedence over the conventional
    /// `DATABASE_URL`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| Self::default().database_url);

        config::Config::builder()
            .set_default("database_url", database_url)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Pool settings for the record store
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url)
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .acquire_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
