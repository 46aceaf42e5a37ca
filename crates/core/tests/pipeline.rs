//! End-to-end properties of the aggregation pipeline

use matrix_core::{
  assemble, FeedbackEvent, Insight, SentimentBucket, SentimentLabel, SourceChannel, ThemeFilter,
};

fn insight(id: &str, theme: &str, channel: SourceChannel) -> Insight {
  Insight {
    id: id.to_string(),
    text: format!("insight {id}"),
    theme: theme.to_string(),
    product_area: "core product".to_string(),
    feedback_type: "feedback".to_string(),
    source_channel: channel,
    workspace_id: "ws-acme".to_string(),
  }
}

fn event(insight_id: &str, label: &str) -> FeedbackEvent {
  FeedbackEvent {
    insight_id: insight_id.to_string(),
    sentiment: SentimentLabel::from(label.to_string()),
    source_path: format!("clips/{insight_id}.wav"),
  }
}

#[test]
fn theme_counts_sum_to_insight_count() {
  let insights: Vec<Insight> = vec![
    insight("1", "ideas", SourceChannel::Meeting),
    insight("2", "ideas", SourceChannel::Meeting),
    insight("3", "complaints", SourceChannel::Meeting),
    insight("4", "pricing mentions", SourceChannel::Meeting),
    insight("5", "needs triage", SourceChannel::Meeting),
  ];

  let dist = assemble(&insights, &[], &ThemeFilter::All);
  let total: usize = dist.theme_counts.values().sum();
  assert_eq!(total, insights.len());
}

#[test]
fn full_snapshot_assembles_consistent_payload() {
  let insights = vec![
    insight("a", "complaints", SourceChannel::Call),
    insight("b", "ideas", SourceChannel::Call),
    insight("c", "complaints", SourceChannel::Call),
  ];
  let events = vec![
    event("a", "NEGATIVE"),
    event("a", "NEGATIVE"),
    event("a", "NEGATIVE"),
    event("a", "POSITIVE"),
    event("b", "POSITIVE"),
    event("b", "POSITIVE"),
    event("b", "NEUTRAL"),
    // Unknown label: must vanish from tallies without failing the batch.
    event("c", "mixed"),
  ];

  let dist = assemble(&insights, &events, &ThemeFilter::All);

  assert_eq!(dist.theme_counts.len(), 2);
  assert_eq!(dist.insight_summaries.len(), 3);

  let a = &dist.insight_summaries[0].summary;
  assert_eq!(a.total, 4);
  assert_eq!(a.score, -0.5);
  assert_eq!(a.bucket, SentimentBucket::MostlyNegative);

  let b = &dist.insight_summaries[1].summary;
  assert!((b.score - 2.0 / 3.0).abs() < 1e-12);
  assert_eq!(b.bucket, SentimentBucket::MostlyPositive);

  let c = &dist.insight_summaries[2].summary;
  assert_eq!(c.total, 0);
  assert_eq!(c.bucket, SentimentBucket::MixedNeutral);
}

#[test]
fn recomputation_over_same_snapshot_is_stable() {
  let insights = vec![
    insight("a", "questions", SourceChannel::Meeting),
    insight("b", "questions", SourceChannel::Meeting),
  ];
  let events = vec![event("a", "POSITIVE"), event("b", "NEGATIVE")];

  let first = assemble(&insights, &events, &ThemeFilter::All);
  let second = assemble(&insights, &events, &ThemeFilter::All);
  assert_eq!(first, second);
}

#[test]
fn distributions_serialize_to_json() {
  let insights = vec![insight("a", "ideas", SourceChannel::Meeting)];
  let events = vec![event("a", "POSITIVE")];

  let dist = assemble(&insights, &events, &ThemeFilter::All);
  let json = serde_json::to_value(&dist).unwrap();

  assert_eq!(json["theme_counts"]["ideas"], 1);
  assert_eq!(json["insight_summaries"][0]["summary"]["counts"]["positive"], 1);
  assert_eq!(json["insight_summaries"][0]["summary"]["bucket"], "MostlyPositive");
}
