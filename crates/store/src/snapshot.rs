//! Snapshot-backed store
//!
//! Reads both feedback tables from a single local JSON file instead of the
//! network. Used for offline analysis of exported data and as the fixture
//! source in CLI tests. The file holds the raw row shapes, so snapshots go
//! through the same boundary validation as live reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use matrix_core::{FeedbackEvent, Insight, SourceChannel};

use crate::records::{validate_events, validate_insights, RawFeedbackEvent, RawInsight};
use crate::store::{InsightStore, StoreError};

/// On-disk shape of an exported store snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
  #[serde(default)]
  pub insights: Vec<RawInsight>,
  #[serde(default)]
  pub feedback_events: Vec<RawFeedbackEvent>,
}

/// [`InsightStore`] over a JSON snapshot file.
///
/// The file is re-read on every call, mirroring the recompute-on-demand
/// model of the live store.
pub struct SnapshotStore {
  path: PathBuf,
}

impl SnapshotStore {
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self { path: path.as_ref().to_path_buf() }
  }

  fn load(&self) -> Result<Snapshot, StoreError> {
    let body = fs::read_to_string(&self.path)?;
    serde_json::from_str(&body).map_err(|source| StoreError::Decode {
      resource: self.path.display().to_string(),
      source,
    })
  }
}

#[async_trait]
impl InsightStore for SnapshotStore {
  async fn list_insights(
    &self,
    workspace_id: &str,
    source_channel: SourceChannel,
  ) -> Result<Vec<Insight>, StoreError> {
    let snapshot = self.load()?;
    let insights = validate_insights(snapshot.insights)
      .into_iter()
      .filter(|i| i.workspace_id == workspace_id && i.source_channel == source_channel)
      .collect();
    Ok(insights)
  }

  async fn list_feedback_events(
    &self,
    insight_ids: &[String],
  ) -> Result<Vec<FeedbackEvent>, StoreError> {
    let snapshot = self.load()?;
    let events = validate_events(snapshot.feedback_events)
      .into_iter()
      .filter(|e| insight_ids.contains(&e.insight_id))
      .collect();
    Ok(events)
  }
}
