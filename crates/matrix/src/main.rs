use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use insight_matrix::commands;
use insight_matrix::server::startup::start_server;
use insight_matrix::service::DistributionService;
use matrix_core::SourceChannel;
use matrix_store::{InsightStore, RestInsightStore, SnapshotStore, StoreConfig};

#[derive(Parser)]
#[command(name = "matrix")]
#[command(
  about = "InsightMatrix - Feedback Analytics\nTheme and sentiment distributions over classified meeting and call feedback"
)]
#[command(version)]
struct Cli {
  /// Read from a local JSON snapshot instead of the live insight store
  #[arg(long, global = true)]
  snapshot: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Common scope arguments shared by every query command
#[derive(Args)]
struct Scope {
  /// Workspace (tenant) identifier
  #[arg(short, long)]
  workspace: String,
  /// Source channel to analyze: meeting or call
  #[arg(short, long)]
  channel: SourceChannel,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the theme frequency distribution for a workspace
  Themes {
    #[command(flatten)]
    scope: Scope,
  },
  /// Show per-insight sentiment summaries
  Insights {
    #[command(flatten)]
    scope: Scope,
    /// Limit to a single theme label
    #[arg(short, long)]
    theme: Option<String>,
  },
  /// Emit the full distributions payload
  Distributions {
    #[command(flatten)]
    scope: Scope,
    /// Limit summaries to a single theme label
    #[arg(short, long)]
    theme: Option<String>,
    /// Print machine-readable JSON instead of tables
    #[arg(long)]
    json: bool,
  },
  /// Serve distributions over HTTP for the dashboard
  Serve {
    /// Server bind address
    #[arg(long, default_value = "127.0.0.1:3400")]
    bind: SocketAddr,
  },
}

/// Build the store once at startup; everything downstream takes it injected.
fn build_store(snapshot: Option<PathBuf>) -> Result<Box<dyn InsightStore>> {
  match snapshot {
    Some(path) => Ok(Box::new(SnapshotStore::new(path))),
    None => {
      let config = StoreConfig::from_env()?;
      Ok(Box::new(RestInsightStore::new(config)?))
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug,hyper=info,reqwest=info")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

  let store = build_store(cli.snapshot)?;
  let service = DistributionService::new(store);

  match cli.command {
    Commands::Themes { scope } => {
      commands::themes(&service, &scope.workspace, scope.channel).await?;
    }
    Commands::Insights { scope, theme } => {
      commands::insights(&service, &scope.workspace, scope.channel, theme).await?;
    }
    Commands::Distributions { scope, theme, json } => {
      commands::distributions(&service, &scope.workspace, scope.channel, theme, json).await?;
    }
    Commands::Serve { bind } => {
      start_server(bind, Arc::new(service)).await?;
    }
  }

  Ok(())
}
