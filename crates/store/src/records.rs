//! Raw store rows and boundary validation
//!
//! The table API returns loosely-shaped rows: columns can be null or absent
//! depending on which ingestion path wrote them. Everything optional is
//! resolved here, at the boundary, so the pipeline only ever sees complete
//! records. A row that cannot be repaired is dropped with a warning and
//! counted; one bad row must never take down the whole render.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use matrix_core::{FeedbackEvent, Insight, SentimentLabel, SourceChannel};

/// A row failed validation at the store boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedRecord {
  #[error("insight row missing required column: {0}")]
  MissingInsightColumn(&'static str),
  #[error("insight row {id}: unknown source channel {channel:?}")]
  UnknownChannel { id: String, channel: String },
  #[error("feedback event row missing required column: {0}")]
  MissingEventColumn(&'static str),
}

/// An insight row as the table API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInsight {
  pub id: Option<String>,
  pub insight: Option<String>,
  pub theme: Option<String>,
  pub product_area: Option<String>,
  pub feedback: Option<String>,
  pub source_channel: Option<String>,
  pub workspace_id: Option<String>,
}

impl RawInsight {
  /// Resolve the row into a typed record, or say precisely why not.
  pub fn validate(self) -> Result<Insight, MalformedRecord> {
    let id = self.id.ok_or(MalformedRecord::MissingInsightColumn("id"))?;
    let text = self.insight.ok_or(MalformedRecord::MissingInsightColumn("insight"))?;
    let theme = self.theme.ok_or(MalformedRecord::MissingInsightColumn("theme"))?;
    let workspace_id =
      self.workspace_id.ok_or(MalformedRecord::MissingInsightColumn("workspace_id"))?;

    let raw_channel =
      self.source_channel.ok_or(MalformedRecord::MissingInsightColumn("source_channel"))?;
    let source_channel: SourceChannel = raw_channel
      .parse()
      .map_err(|_| MalformedRecord::UnknownChannel { id: id.clone(), channel: raw_channel })?;

    Ok(Insight {
      id,
      text,
      theme,
      // Free-text tags; absent is a legitimate state for older rows.
      product_area: self.product_area.unwrap_or_default(),
      feedback_type: self.feedback.unwrap_or_default(),
      source_channel,
      workspace_id,
    })
  }
}

/// A feedback event row as the table API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeedbackEvent {
  pub insight_id: Option<String>,
  pub sentiment: Option<String>,
  pub source_path: Option<String>,
}

impl RawFeedbackEvent {
  /// Resolve the row into a typed event.
  ///
  /// An out-of-contract sentiment string is not malformed here; it becomes
  /// `SentimentLabel::Unrecognized` and the scorer decides what to do with
  /// it. Only a missing reference makes the row unusable.
  pub fn validate(self) -> Result<FeedbackEvent, MalformedRecord> {
    let insight_id = self.insight_id.ok_or(MalformedRecord::MissingEventColumn("insight_id"))?;
    let sentiment = self.sentiment.ok_or(MalformedRecord::MissingEventColumn("sentiment"))?;

    Ok(FeedbackEvent {
      insight_id,
      sentiment: SentimentLabel::from(sentiment),
      source_path: self.source_path.unwrap_or_default(),
    })
  }
}

/// Validate a batch of insight rows, dropping the malformed ones.
pub fn validate_insights(rows: Vec<RawInsight>) -> Vec<Insight> {
  let mut out = Vec::with_capacity(rows.len());
  let mut dropped = 0usize;
  for row in rows {
    match row.validate() {
      Ok(insight) => out.push(insight),
      Err(e) => {
        dropped += 1;
        warn!(error = %e, "dropping malformed insight row");
      }
    }
  }
  if dropped > 0 {
    warn!(dropped, kept = out.len(), "insight rows failed boundary validation");
  }
  out
}

/// Validate a batch of feedback event rows, dropping the malformed ones.
pub fn validate_events(rows: Vec<RawFeedbackEvent>) -> Vec<FeedbackEvent> {
  let mut out = Vec::with_capacity(rows.len());
  let mut dropped = 0usize;
  for row in rows {
    match row.validate() {
      Ok(event) => out.push(event),
      Err(e) => {
        dropped += 1;
        warn!(error = %e, "dropping malformed feedback event row");
      }
    }
  }
  if dropped > 0 {
    warn!(dropped, kept = out.len(), "feedback event rows failed boundary validation");
  }
  out
}
