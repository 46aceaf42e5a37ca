//! Theme frequency aggregation
//!
//! Counts insights per theme for a workspace/channel snapshot. The input set
//! must already be scoped to a single workspace; scoping is the fetch layer's
//! job, not ours.

use std::collections::HashMap;

use crate::model::Insight;

/// Mapping from theme label to the number of insights carrying it.
///
/// Only observed themes appear; a theme with zero insights has no entry.
/// Key order is unspecified, consumers sort at presentation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDistribution {
  counts: HashMap<String, usize>,
}

impl ThemeDistribution {
  pub fn from_insights(insights: &[Insight]) -> Self {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for insight in insights {
      *counts.entry(insight.theme.clone()).or_insert(0) += 1;
    }
    Self { counts }
  }

  pub fn counts(&self) -> &HashMap<String, usize> {
    &self.counts
  }

  /// Number of insights a theme was observed on, zero if never observed.
  pub fn count(&self, theme: &str) -> usize {
    self.counts.get(theme).copied().unwrap_or(0)
  }

  /// Distinct theme labels observed, sorted for stable display.
  pub fn themes(&self) -> Vec<&str> {
    let mut themes: Vec<&str> = self.counts.keys().map(String::as_str).collect();
    themes.sort_unstable();
    themes
  }

  /// Total insights counted across all themes.
  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }
}
