//! Insight Store interface and error taxonomy

use async_trait::async_trait;
use thiserror::Error;

use matrix_core::{FeedbackEvent, Insight, SourceChannel};

/// A read against the Insight Store failed.
///
/// The pipeline never retries these; they propagate unmodified to whoever
/// triggered the fetch, which presents a retry affordance or an empty state.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("insight store request failed: {0}")]
  Fetch(#[from] reqwest::Error),

  #[error("insight store returned {status} for {resource}: {body}")]
  Status { resource: String, status: u16, body: String },

  #[error("insight store response for {resource} could not be decoded: {source}")]
  Decode {
    resource: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("missing store configuration: {0} is not set")]
  Config(String),

  #[error("snapshot file could not be read: {0}")]
  Snapshot(#[from] std::io::Error),
}

/// Read-only view of the feedback tables, scoped the way the dashboard
/// queries them.
///
/// Implementations hand back already-validated records; raw-row cleanup is
/// their problem, not the caller's. Zero rows is a normal result everywhere.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait InsightStore: Send + Sync {
  /// All insights for one workspace and source channel.
  async fn list_insights(
    &self,
    workspace_id: &str,
    source_channel: SourceChannel,
  ) -> Result<Vec<Insight>, StoreError>;

  /// All feedback events referencing any of the given insights.
  async fn list_feedback_events(
    &self,
    insight_ids: &[String],
  ) -> Result<Vec<FeedbackEvent>, StoreError>;
}
