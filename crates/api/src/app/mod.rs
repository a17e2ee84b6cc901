//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared catalogue and the operations exposed to HTTP
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router around a freshly seeded catalogue.
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let services = AppServices::seeded(config.featured_count)?;
    Ok(build_router(Arc::new(services), config))
}

/// Build the router around existing services.
pub fn build_router(services: Arc<AppServices>, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        // Item images are also reachable relative to `/rental-catalogue/<id>` pages.
        .nest_service(
            "/rental-catalogue/img",
            ServeDir::new(config.assets_dir.join("img")),
        )
        // Anything not routed is looked up as a static asset.
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http()),
        )
}
