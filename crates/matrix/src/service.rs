//! Distribution service
//!
//! The one operation the presentation layer consumes: fetch a snapshot for a
//! workspace/channel scope and assemble it into distributions. The store is
//! injected, so every surface (CLI, REST, tests) runs the same path against
//! whichever store backs it.

use tracing::debug;

use matrix_core::{assemble, Distributions, SourceChannel, ThemeFilter};
use matrix_store::{InsightStore, StoreError};

/// Read-and-reshape service over an injected [`InsightStore`].
pub struct DistributionService {
  store: Box<dyn InsightStore>,
}

impl DistributionService {
  pub fn new(store: Box<dyn InsightStore>) -> Self {
    Self { store }
  }

  /// Fetch and aggregate one workspace/channel scope.
  ///
  /// The two reads are sequential but not transactional: events are listed
  /// for whatever insight set the first read returned, and a store changing
  /// underneath produces a best-effort snapshot, not an error. Store
  /// failures propagate unmodified; nothing is retried here.
  pub async fn get_distributions(
    &self,
    workspace_id: &str,
    source_channel: SourceChannel,
    filter: &ThemeFilter,
  ) -> Result<Distributions, StoreError> {
    let insights = self.store.list_insights(workspace_id, source_channel).await?;
    debug!(workspace_id, %source_channel, count = insights.len(), "fetched insights");

    let insight_ids: Vec<String> = insights.iter().map(|i| i.id.clone()).collect();
    let events = self.store.list_feedback_events(&insight_ids).await?;
    debug!(count = events.len(), "fetched feedback events");

    Ok(assemble(&insights, &events, filter))
  }
}
