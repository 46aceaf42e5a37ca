//! Endpoint handlers

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use matrix_core::{SourceChannel, ThemeFilter};

use crate::server::types::{
  ApiError, DistributionsQuery, DistributionsResponse, ErrorResponse, StatusResponse,
};
use crate::service::DistributionService;

/// GET /status - Health check endpoint
pub async fn status() -> Json<StatusResponse> {
  Json(StatusResponse {
    status: "healthy".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  })
}

/// GET /distributions - The assembled dashboard payload for one scope
pub async fn distributions(
  State(service): State<Arc<DistributionService>>,
  Query(query): Query<DistributionsQuery>,
) -> Result<Json<DistributionsResponse>, (StatusCode, Json<ErrorResponse>)> {
  let transaction_id = Uuid::new_v4();

  let channel: SourceChannel = match query.source_channel.parse() {
    Ok(channel) => channel,
    Err(e) => {
      let error = ApiError::new("invalid_source_channel", &e);
      return Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(transaction_id, vec![error])),
      ));
    }
  };

  let filter = ThemeFilter::from(query.theme);
  match service.get_distributions(&query.workspace_id, channel, &filter).await {
    Ok(dist) => {
      info!(
        %transaction_id,
        workspace_id = %query.workspace_id,
        themes = dist.theme_counts.len(),
        insights = dist.insight_summaries.len(),
        "served distributions"
      );
      Ok(Json(DistributionsResponse::new(
        transaction_id,
        query.workspace_id,
        channel.to_string(),
        dist,
      )))
    }
    Err(e) => {
      error!(%transaction_id, error = %e, "insight store fetch failed");
      let error = ApiError::new("store_fetch_failed", &format!("Insight store read failed: {e}"));
      Err((
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::new(transaction_id, vec![error])),
      ))
    }
  }
}
