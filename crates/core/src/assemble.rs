//! Distribution assembly
//!
//! Joins the theme aggregator and the sentiment scorer into the payload the
//! dashboard widgets consume: a theme count mapping for the pie chart and an
//! ordered list of per-insight sentiment breakdowns for the stacked bars.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::ThemeDistribution;
use crate::model::{FeedbackEvent, Insight};
use crate::sentiment::{summarize_events, InsightSentimentSummary};

/// Which insights to include in the per-insight breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeFilter {
  All,
  Theme(String),
}

impl ThemeFilter {
  pub fn matches(&self, theme: &str) -> bool {
    match self {
      ThemeFilter::All => true,
      ThemeFilter::Theme(wanted) => wanted == theme,
    }
  }
}

impl From<Option<String>> for ThemeFilter {
  /// `None` and the empty string both mean "all themes"; the UI's theme
  /// dropdown uses `""` as its unselected sentinel.
  fn from(value: Option<String>) -> Self {
    match value {
      Some(theme) if !theme.is_empty() => ThemeFilter::Theme(theme),
      _ => ThemeFilter::All,
    }
  }
}

/// Sentiment breakdown for a single insight, labeled for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBreakdown {
  pub insight_label: String,
  pub theme: String,
  pub summary: InsightSentimentSummary,
}

/// The assembled dashboard payload for one workspace/channel snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributions {
  /// Theme label to insight count, over the whole snapshot regardless of
  /// the filter.
  pub theme_counts: HashMap<String, usize>,
  /// One entry per insight passing the filter, in input order.
  pub insight_summaries: Vec<InsightBreakdown>,
}

/// Assemble distributions from a fetched snapshot.
///
/// Inputs are borrowed and never mutated. A filter matching no insights
/// yields an empty summary list, not an error.
pub fn assemble(
  insights: &[Insight],
  events: &[FeedbackEvent],
  filter: &ThemeFilter,
) -> Distributions {
  let theme_counts = ThemeDistribution::from_insights(insights).counts().clone();

  let mut events_by_insight: HashMap<&str, Vec<&FeedbackEvent>> = HashMap::new();
  for event in events {
    events_by_insight.entry(event.insight_id.as_str()).or_default().push(event);
  }

  let insight_summaries = insights
    .iter()
    .filter(|insight| filter.matches(&insight.theme))
    .map(|insight| {
      let insight_events = events_by_insight.get(insight.id.as_str()).map_or(&[][..], Vec::as_slice);
      InsightBreakdown {
        insight_label: insight.text.clone(),
        theme: insight.theme.clone(),
        summary: summarize_events(insight_events.iter().copied()),
      }
    })
    .collect();

  Distributions { theme_counts, insight_summaries }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{SentimentLabel, SourceChannel};
  use crate::sentiment::SentimentBucket;

  fn insight(id: &str, text: &str, theme: &str) -> Insight {
    Insight {
      id: id.to_string(),
      text: text.to_string(),
      theme: theme.to_string(),
      product_area: "onboarding".to_string(),
      feedback_type: "complaint".to_string(),
      source_channel: SourceChannel::Call,
      workspace_id: "ws-1".to_string(),
    }
  }

  fn event(insight_id: &str, label: &str) -> FeedbackEvent {
    FeedbackEvent {
      insight_id: insight_id.to_string(),
      sentiment: SentimentLabel::from(label.to_string()),
      source_path: format!("recordings/{insight_id}.wav"),
    }
  }

  #[test]
  fn assembles_counts_and_summaries() {
    let insights = vec![
      insight("a", "Setup flow is confusing", "complaints"),
      insight("b", "Wants CSV export", "ideas"),
    ];
    let events = vec![
      event("a", "NEGATIVE"),
      event("a", "NEGATIVE"),
      event("a", "NEUTRAL"),
      event("b", "POSITIVE"),
    ];

    let dist = assemble(&insights, &events, &ThemeFilter::All);
    assert_eq!(dist.theme_counts.get("complaints"), Some(&1));
    assert_eq!(dist.theme_counts.get("ideas"), Some(&1));
    assert_eq!(dist.insight_summaries.len(), 2);

    let first = &dist.insight_summaries[0];
    assert_eq!(first.insight_label, "Setup flow is confusing");
    assert_eq!(first.summary.bucket, SentimentBucket::MostlyNegative);
  }

  #[test]
  fn summaries_preserve_input_order() {
    let insights = vec![
      insight("c", "third", "ideas"),
      insight("a", "first", "ideas"),
      insight("b", "second", "ideas"),
    ];

    let dist = assemble(&insights, &[], &ThemeFilter::All);
    let labels: Vec<&str> =
      dist.insight_summaries.iter().map(|b| b.insight_label.as_str()).collect();
    assert_eq!(labels, vec!["third", "first", "second"]);
  }

  #[test]
  fn theme_filter_limits_summaries_but_not_counts() {
    let insights = vec![
      insight("a", "one", "complaints"),
      insight("b", "two", "ideas"),
      insight("c", "three", "complaints"),
    ];

    let dist = assemble(&insights, &[], &ThemeFilter::Theme("complaints".to_string()));
    assert_eq!(dist.insight_summaries.len(), 2);
    assert!(dist.insight_summaries.iter().all(|b| b.theme == "complaints"));
    // Counts still cover the full snapshot.
    assert_eq!(dist.theme_counts.get("ideas"), Some(&1));
  }

  #[test]
  fn filter_with_no_matches_yields_empty_list() {
    let insights = vec![insight("a", "one", "ideas")];
    let dist = assemble(&insights, &[], &ThemeFilter::Theme("pricing mentions".to_string()));
    assert!(dist.insight_summaries.is_empty());
    assert_eq!(dist.theme_counts.get("ideas"), Some(&1));
  }

  #[test]
  fn insight_without_events_gets_neutral_summary() {
    let insights = vec![insight("a", "quiet one", "questions")];
    let dist = assemble(&insights, &[], &ThemeFilter::All);
    let summary = &dist.insight_summaries[0].summary;
    assert_eq!(summary.total, 0);
    assert_eq!(summary.score, 0.0);
    assert_eq!(summary.bucket, SentimentBucket::MixedNeutral);
  }

  #[test]
  fn inputs_are_not_mutated() {
    let insights = vec![insight("a", "one", "ideas")];
    let events = vec![event("a", "POSITIVE")];
    let insights_before = insights.clone();
    let events_before = events.clone();

    let _ = assemble(&insights, &events, &ThemeFilter::All);
    assert_eq!(insights, insights_before);
    assert_eq!(events, events_before);
  }

  #[test]
  fn empty_string_filter_means_all() {
    assert_eq!(ThemeFilter::from(Some(String::new())), ThemeFilter::All);
    assert_eq!(ThemeFilter::from(None), ThemeFilter::All);
    assert_eq!(
      ThemeFilter::from(Some("ideas".to_string())),
      ThemeFilter::Theme("ideas".to_string())
    );
  }
}
