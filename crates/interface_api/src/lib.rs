//! HTTP API Layer
//!
//! REST API for customers and building insurance policies using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per resource
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(klant_adapter, opstal_adapter, system_clock());
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{HealthCheckable, SharedClock};
use domain_klant::{KlantPort, KlantService};
use domain_opstal::{OpstalverzekeringPort, OpstalverzekeringService};

use crate::handlers::{health, klanten, opstalverzekeringen};
use crate::middleware::{audit_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub klanten: KlantService,
    pub verzekeringen: OpstalverzekeringService,
    /// Adapters consulted by the readiness check
    pub health: Vec<Arc<dyn HealthCheckable>>,
}

impl AppState {
    /// Wires the services to the given record stores
    ///
    /// # Arguments
    ///
    /// * `klant_port` - Customer record store
    /// * `opstal_port` - Policy record store
    /// * `clock` - Source of "now" for start and end dates
    pub fn new<K, O>(klant_port: Arc<K>, opstal_port: Arc<O>, clock: SharedClock) -> Self
    where
        K: KlantPort,
        O: OpstalverzekeringPort,
    {
        let klant_health: Arc<dyn HealthCheckable> = klant_port.clone();
        let opstal_health: Arc<dyn HealthCheckable> = opstal_port.clone();

        Self {
            klanten: KlantService::new(klant_port.clone(), clock.clone()),
            verzekeringen: OpstalverzekeringService::new(opstal_port, klant_port, clock),
            health: vec![klant_health, opstal_health],
        }
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let klant_routes = Router::new()
        .route("/", post(klanten::create_klant))
        .route("/:id", get(klanten::get_klant))
        .route("/:id/einddatum", put(klanten::set_einddatum));

    let opstal_routes = Router::new()
        .route("/", post(opstalverzekeringen::create_opstalverzekering))
        .route("/polisnummer/:polis_nummer", get(opstalverzekeringen::get_by_polis_nummer))
        .route("/klant/:klant_id", get(opstalverzekeringen::get_by_klant))
        .route("/typedekking/:type_dekking", get(opstalverzekeringen::get_by_type_dekking))
        .route("/:id/einddatum", put(opstalverzekeringen::set_einddatum));

    let api_routes = Router::new()
        .nest("/klanten", klant_routes)
        .nest("/opstalverzekeringen", opstal_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
