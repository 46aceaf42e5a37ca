//! Terminal rendering for distributions

use colored::*;

use matrix_core::{Distributions, InsightBreakdown, SentimentBucket};

/// Render the theme distribution as a sorted count table with percentages.
pub fn render_theme_counts(distributions: &Distributions) -> String {
  let total: usize = distributions.theme_counts.values().sum();
  if total == 0 {
    return "No theme data available".dimmed().to_string();
  }

  let mut rows: Vec<(&str, usize)> =
    distributions.theme_counts.iter().map(|(theme, count)| (theme.as_str(), *count)).collect();
  // Largest themes first; ties go alphabetically so output stays stable.
  rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

  let mut out = String::new();
  for (theme, count) in rows {
    let percentage = (count as f64 / total as f64) * 100.0;
    out.push_str(&format!("  {} {} ({percentage:.1}%)\n", theme.blue().bold(), count));
  }
  out.push_str(&format!("  {} {total}\n", "total".dimmed()));
  out
}

/// Render one insight's sentiment breakdown.
pub fn render_breakdown(breakdown: &InsightBreakdown) -> String {
  let bucket = bucket_label(breakdown.summary.bucket);
  let counts = &breakdown.summary.counts;
  format!(
    "  {}\n    theme: {}  |  {}  score {:+.2}  ({} up / {} flat / {} down)\n",
    breakdown.insight_label.bold(),
    breakdown.theme.cyan(),
    bucket,
    breakdown.summary.score,
    counts.positive,
    counts.neutral,
    counts.negative,
  )
}

fn bucket_label(bucket: SentimentBucket) -> ColoredString {
  match bucket {
    SentimentBucket::MostlyPositive => bucket.to_string().green().bold(),
    SentimentBucket::MostlyNegative => bucket.to_string().red().bold(),
    SentimentBucket::MixedNeutral => bucket.to_string().yellow(),
  }
}
