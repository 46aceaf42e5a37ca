//! Per-insight sentiment scoring
//!
//! Tallies the sentiment labels of an insight's feedback events, derives a
//! normalized score in [-1, 1], and classifies it into one of three coarse
//! buckets for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::model::{FeedbackEvent, Sentiment, SentimentLabel};

/// Score above which an insight reads as positive, below the negation of
/// which it reads as negative. Strictly exclusive on both ends: a score of
/// exactly 0.3 or -0.3 stays in the middle bucket.
pub const BUCKET_THRESHOLD: f64 = 0.3;

/// The coarse three-way classification shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentBucket {
  MostlyPositive,
  MostlyNegative,
  MixedNeutral,
}

impl SentimentBucket {
  /// Classify a normalized score.
  pub fn from_score(score: f64) -> Self {
    if score > BUCKET_THRESHOLD {
      SentimentBucket::MostlyPositive
    } else if score < -BUCKET_THRESHOLD {
      SentimentBucket::MostlyNegative
    } else {
      SentimentBucket::MixedNeutral
    }
  }
}

impl fmt::Display for SentimentBucket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SentimentBucket::MostlyPositive => write!(f, "Mostly Positive"),
      SentimentBucket::MostlyNegative => write!(f, "Mostly Negative"),
      SentimentBucket::MixedNeutral => write!(f, "Mixed/Neutral"),
    }
  }
}

/// Raw counts per known sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
  pub positive: usize,
  pub neutral: usize,
  pub negative: usize,
}

/// The derived sentiment summary for one insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSentimentSummary {
  pub counts: SentimentCounts,
  /// Total of the three known buckets. Dropped events are excluded.
  pub total: usize,
  /// `(positive - negative) / total`, or 0.0 when there are no events.
  pub score: f64,
  pub bucket: SentimentBucket,
}

/// Running tally of one insight's feedback events.
///
/// Events with unrecognized labels are excluded from every bucket and from
/// the total, but tracked in `dropped` so bad upstream labels surface in the
/// logs instead of vanishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentTally {
  pub counts: SentimentCounts,
  pub dropped: usize,
}

impl SentimentTally {
  pub fn from_events<'a, I>(events: I) -> Self
  where
    I: IntoIterator<Item = &'a FeedbackEvent>,
  {
    let mut tally = SentimentTally::default();
    for event in events {
      tally.record(event);
    }
    tally
  }

  pub fn record(&mut self, event: &FeedbackEvent) {
    match &event.sentiment {
      SentimentLabel::Known(Sentiment::Positive) => self.counts.positive += 1,
      SentimentLabel::Known(Sentiment::Neutral) => self.counts.neutral += 1,
      SentimentLabel::Known(Sentiment::Negative) => self.counts.negative += 1,
      SentimentLabel::Unrecognized(raw) => {
        self.dropped += 1;
        warn!(
          insight_id = %event.insight_id,
          label = %raw,
          "dropping feedback event with unrecognized sentiment label"
        );
      }
    }
  }

  pub fn total(&self) -> usize {
    self.counts.positive + self.counts.neutral + self.counts.negative
  }

  /// Normalized score in [-1, 1]; 0.0 for an empty tally rather than a
  /// division by zero.
  pub fn score(&self) -> f64 {
    let total = self.total();
    if total == 0 {
      return 0.0;
    }
    (self.counts.positive as f64 - self.counts.negative as f64) / total as f64
  }

  pub fn summarize(&self) -> InsightSentimentSummary {
    let score = self.score();
    InsightSentimentSummary {
      counts: self.counts,
      total: self.total(),
      score,
      bucket: SentimentBucket::from_score(score),
    }
  }
}

/// Score one insight's events in a single call.
pub fn summarize_events<'a, I>(events: I) -> InsightSentimentSummary
where
  I: IntoIterator<Item = &'a FeedbackEvent>,
{
  SentimentTally::from_events(events).summarize()
}
