//! REST client for the Insight Store table API
//!
//! Speaks the PostgREST filter dialect the managed store exposes:
//! `GET /feedback_insights?workspace_id=eq.<id>&source_channel=eq.<channel>`
//! and `GET /feedback_events?insight_id=in.(<ids>)`. Row-level security on
//! the store side enforces tenancy; the filters here only narrow the read.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use matrix_core::{FeedbackEvent, Insight, SourceChannel};

use crate::config::StoreConfig;
use crate::records::{validate_events, validate_insights, RawFeedbackEvent, RawInsight};
use crate::store::{InsightStore, StoreError};

const INSIGHTS_TABLE: &str = "feedback_insights";
const EVENTS_TABLE: &str = "feedback_events";

/// HTTP implementation of [`InsightStore`].
pub struct RestInsightStore {
  client: Client,
  config: StoreConfig,
}

impl RestInsightStore {
  /// Build a client from explicit configuration.
  pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn table_url(&self, table: &str) -> String {
    format!("{}/{}", self.config.base_url, table)
  }

  /// Issue a filtered table read and return the raw body text.
  async fn fetch_table(&self, table: &str, filters: &[(&str, String)]) -> Result<String, StoreError> {
    let url = self.table_url(table);
    debug!(table, ?filters, "fetching from insight store");

    let response = self
      .client
      .get(&url)
      .query(filters)
      .header("apikey", &self.config.api_key)
      .bearer_auth(&self.config.api_key)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::Status {
        resource: table.to_string(),
        status: status.as_u16(),
        body,
      });
    }

    Ok(response.text().await?)
  }
}

/// Build a PostgREST `in.(...)` filter value, quoting each id so reserved
/// characters like `,` or `)` cannot corrupt the list.
fn in_filter(ids: &[String]) -> String {
  let quoted: Vec<String> =
    ids.iter().map(|id| format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))).collect();
  format!("in.({})", quoted.join(","))
}

#[async_trait]
impl InsightStore for RestInsightStore {
  async fn list_insights(
    &self,
    workspace_id: &str,
    source_channel: SourceChannel,
  ) -> Result<Vec<Insight>, StoreError> {
    let filters = [
      ("workspace_id", format!("eq.{workspace_id}")),
      ("source_channel", format!("eq.{source_channel}")),
    ];
    let body = self.fetch_table(INSIGHTS_TABLE, &filters).await?;

    let rows: Vec<RawInsight> = serde_json::from_str(&body)
      .map_err(|source| StoreError::Decode { resource: INSIGHTS_TABLE.to_string(), source })?;
    Ok(validate_insights(rows))
  }

  async fn list_feedback_events(
    &self,
    insight_ids: &[String],
  ) -> Result<Vec<FeedbackEvent>, StoreError> {
    if insight_ids.is_empty() {
      return Ok(Vec::new());
    }

    let filters = [("insight_id", in_filter(insight_ids))];
    let body = self.fetch_table(EVENTS_TABLE, &filters).await?;

    let rows: Vec<RawFeedbackEvent> = serde_json::from_str(&body)
      .map_err(|source| StoreError::Decode { resource: EVENTS_TABLE.to_string(), source })?;
    Ok(validate_events(rows))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_urls_join_cleanly() {
    let store =
      RestInsightStore::new(StoreConfig::new("https://store.example.com/", "key")).unwrap();
    assert_eq!(store.table_url(INSIGHTS_TABLE), "https://store.example.com/feedback_insights");
    assert_eq!(store.table_url(EVENTS_TABLE), "https://store.example.com/feedback_events");
  }

  #[test]
  fn in_filter_quotes_every_id() {
    let ids = vec!["a".to_string(), "b".to_string()];
    assert_eq!(in_filter(&ids), r#"in.("a","b")"#);
  }

  #[test]
  fn in_filter_neutralizes_reserved_characters() {
    // Ids with PostgREST list syntax in them must stay single values.
    let ids = vec!["a,b".to_string(), "c)".to_string()];
    assert_eq!(in_filter(&ids), r#"in.("a,b","c)")"#);

    let ids = vec![r#"a"b"#.to_string()];
    assert_eq!(in_filter(&ids), r#"in.("a\"b")"#);
  }
}
