//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared, lock-guarded product store
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request extraction (decode + validate) and JSON rendering
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
