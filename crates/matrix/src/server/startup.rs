//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::server::routing::create_router;
use crate::service::DistributionService;

/// Start the REST server on the given address.
pub async fn start_server(addr: SocketAddr, service: Arc<DistributionService>) -> Result<()> {
  info!(%addr, "starting distributions server");

  let app = create_router(service).layer(
    ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()), // TODO: Lock CORS down to the dashboard origin
  );

  let listener = TcpListener::bind(addr).await?;
  info!(%addr, "server listening");

  serve(listener, app).await?;
  info!("server shutdown");
  Ok(())
}
