//! CLI command implementations
//!
//! Thin wrappers: run the distribution service, hand the result to the
//! display layer or dump it as JSON.

use anyhow::Result;
use colored::*;

use matrix_core::{SourceChannel, ThemeFilter};

use crate::display::{render_breakdown, render_theme_counts};
use crate::service::DistributionService;

/// Show the per-theme insight counts for a scope.
pub async fn themes(
  service: &DistributionService,
  workspace_id: &str,
  channel: SourceChannel,
) -> Result<()> {
  let distributions = service.get_distributions(workspace_id, channel, &ThemeFilter::All).await?;

  println!("{} Theme distribution ({workspace_id}, {channel})", "▣".cyan());
  print!("{}", render_theme_counts(&distributions));
  Ok(())
}

/// Show per-insight sentiment summaries, optionally limited to one theme.
pub async fn insights(
  service: &DistributionService,
  workspace_id: &str,
  channel: SourceChannel,
  theme: Option<String>,
) -> Result<()> {
  let filter = ThemeFilter::from(theme);
  let distributions = service.get_distributions(workspace_id, channel, &filter).await?;

  if distributions.insight_summaries.is_empty() {
    match &filter {
      ThemeFilter::Theme(theme) => println!("No insights found for theme: {}", theme.yellow()),
      ThemeFilter::All => println!("No insights found."),
    }
    return Ok(());
  }

  println!("{} Insight sentiment ({workspace_id}, {channel})", "▣".cyan());
  for breakdown in &distributions.insight_summaries {
    print!("{}", render_breakdown(breakdown));
  }
  Ok(())
}

/// Emit the full distributions payload, as JSON or human-readable.
pub async fn distributions(
  service: &DistributionService,
  workspace_id: &str,
  channel: SourceChannel,
  theme: Option<String>,
  json: bool,
) -> Result<()> {
  let filter = ThemeFilter::from(theme);
  let distributions = service.get_distributions(workspace_id, channel, &filter).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&distributions)?);
    return Ok(());
  }

  println!("{} Theme distribution", "▣".cyan());
  print!("{}", render_theme_counts(&distributions));
  println!();
  println!("{} Insight sentiment", "▣".cyan());
  for breakdown in &distributions.insight_summaries {
    print!("{}", render_breakdown(breakdown));
  }
  Ok(())
}
