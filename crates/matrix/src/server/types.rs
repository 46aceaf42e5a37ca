//! REST API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use matrix_core::{Distributions, InsightBreakdown};

/// API error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,
  /// Human readable error message
  pub message: String,
}

impl ApiError {
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string() }
  }
}

/// Error body for non-2xx responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,
  pub errors: Vec<ApiError>,
}

impl ErrorResponse {
  pub fn new(transaction_id: Uuid, errors: Vec<ApiError>) -> Self {
    Self { transaction_id, errors }
  }
}

/// Response for /status endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
  pub status: String,
  pub version: String,
}

/// Query parameters for /distributions
#[derive(Debug, Deserialize)]
pub struct DistributionsQuery {
  pub workspace_id: String,
  pub source_channel: String,
  /// Specific theme label; absent or empty means all themes.
  #[serde(default)]
  pub theme: Option<String>,
}

/// Response for /distributions
#[derive(Debug, Serialize, Deserialize)]
pub struct DistributionsResponse {
  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,
  pub workspace_id: String,
  pub source_channel: String,
  pub theme_counts: std::collections::HashMap<String, usize>,
  pub insight_summaries: Vec<InsightBreakdown>,
}

impl DistributionsResponse {
  pub fn new(
    transaction_id: Uuid,
    workspace_id: String,
    source_channel: String,
    distributions: Distributions,
  ) -> Self {
    Self {
      transaction_id,
      workspace_id,
      source_channel,
      theme_counts: distributions.theme_counts,
      insight_summaries: distributions.insight_summaries,
    }
  }
}
