//! Data model for the aggregation pipeline
//!
//! These are the strongly-typed records produced by the store boundary. The
//! pipeline treats them as immutable snapshots; nothing here has an update
//! path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The channel a piece of feedback originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceChannel {
  Meeting,
  Call,
}

impl fmt::Display for SourceChannel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SourceChannel::Meeting => write!(f, "meeting"),
      SourceChannel::Call => write!(f, "call"),
    }
  }
}

impl FromStr for SourceChannel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "meeting" => Ok(SourceChannel::Meeting),
      "call" => Ok(SourceChannel::Call),
      other => Err(format!("unknown source channel: {other}")),
    }
  }
}

/// One of the three sentiment labels the upstream classifier is expected to
/// emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
  Positive,
  Neutral,
  Negative,
}

/// The label actually carried by a feedback event.
///
/// The upstream classifier has no enumerated contract, so events can arrive
/// with labels outside the known three. Those are preserved verbatim rather
/// than rejected at parse time; the scorer drops them from the tallies and
/// counts them so the drops stay visible. Matching is exact and
/// case-sensitive: `"positive"` is not `POSITIVE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
  Known(Sentiment),
  Unrecognized(String),
}

impl SentimentLabel {
  pub fn known(&self) -> Option<Sentiment> {
    match self {
      SentimentLabel::Known(s) => Some(*s),
      SentimentLabel::Unrecognized(_) => None,
    }
  }
}

impl From<String> for SentimentLabel {
  fn from(raw: String) -> Self {
    match raw.as_str() {
      "POSITIVE" => SentimentLabel::Known(Sentiment::Positive),
      "NEUTRAL" => SentimentLabel::Known(Sentiment::Neutral),
      "NEGATIVE" => SentimentLabel::Known(Sentiment::Negative),
      _ => SentimentLabel::Unrecognized(raw),
    }
  }
}

impl From<SentimentLabel> for String {
  fn from(label: SentimentLabel) -> Self {
    match label {
      SentimentLabel::Known(Sentiment::Positive) => "POSITIVE".to_string(),
      SentimentLabel::Known(Sentiment::Neutral) => "NEUTRAL".to_string(),
      SentimentLabel::Known(Sentiment::Negative) => "NEGATIVE".to_string(),
      SentimentLabel::Unrecognized(raw) => raw,
    }
  }
}

/// One distinct piece of classified feedback, scoped to a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
  pub id: String,
  /// The free-text insight itself; doubles as the presentation label.
  pub text: String,
  pub theme: String,
  pub product_area: String,
  pub feedback_type: String,
  pub source_channel: SourceChannel,
  pub workspace_id: String,
}

/// One sentiment-bearing observation tied to an insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
  pub insight_id: String,
  pub sentiment: SentimentLabel,
  /// Locator of the originating clip/recording. Cross-referencing only;
  /// never aggregated.
  pub source_path: String,
}

/// The theme labels the dashboard ships with. A suggested set, not a
/// contract: the classifier is free-form and unanticipated themes must not
/// be rejected.
pub const DEFAULT_THEMES: [&str; 10] = [
  "ideas",
  "problems",
  "complaints",
  "appreciations",
  "questions",
  "compete mentions",
  "pricing mentions",
  "customer support",
  "customer education",
  "needs triage",
];
