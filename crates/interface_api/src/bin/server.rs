//! Verzekering API - Server Binary
//!
//! Starts the HTTP API for customers and building insurance policies.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin verzekering-api
//!
//! # Run with environment variables
//! API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin verzekering-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string (falls back to `DATABASE_URL`)
//! * `API_DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! * `API_DB_MIN_CONNECTIONS` - Idle connections kept open (default: 2)
//! * `API_DB_ACQUIRE_TIMEOUT_SECS` - Wait for a free connection (default: 30)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::system_clock;
use infra_db::{create_pool, run_migrations};
use infra_db::adapters::{PostgresKlantAdapter, PostgresOpstalverzekeringAdapter};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::{create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, connects to the database,
/// applies migrations and serves until Ctrl+C or SIGTERM.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Verzekering API server"
    );

    let pool = create_pool(config.database_config())
        .await
        .context("Failed to connect to database")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    let state = AppState::new(
        Arc::new(PostgresKlantAdapter::new(pool.clone())),
        Arc::new(PostgresOpstalverzekeringAdapter::new(pool)),
        system_clock(),
    );
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests are allowed to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
