//! Axum router configuration

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::server::handlers;
use crate::service::DistributionService;

/// Create the application router with the shared distribution service.
pub fn create_router(service: Arc<DistributionService>) -> Router {
  Router::new()
    .route("/status", get(handlers::status))
    .route("/distributions", get(handlers::distributions))
    .with_state(service)
}
