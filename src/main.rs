//! Coursework MCP Server - Main Entry Point
//!
//! This is the main entry point for the coursework MCP server application.
//! The actual implementation is in the `coursework_mcp` library.

use anyhow::Result;
use clap::Parser;
use coursework_mcp::{Config, CourseworkServerHandler};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Coursework MCP Server - academic task tracking with undo/redo via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Days ahead (today included) within which pending tasks are tagged Urgent
    #[arg(long)]
    urgent_days: Option<i64>,

    /// Maximum number of changes that can be undone
    #[arg(long)]
    history_limit: Option<usize>,

    /// Allow several tasks to share a title
    #[arg(long)]
    allow_duplicate_titles: bool,
}

impl Args {
    /// Apply command-line overrides on top of the file configuration
    fn apply(&self, config: &mut Config) {
        if let Some(days) = self.urgent_days {
            config.board.urgent_window_days = days;
        }
        if let Some(limit) = self.history_limit {
            config.board.history_limit = Some(limit);
        }
        if self.allow_duplicate_titles {
            config.board.unique_titles = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursework_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    info!(
        "Starting coursework MCP server: urgent_window_days={}, unique_titles={}, history_limit={:?}",
        config.board.urgent_window_days, config.board.unique_titles, config.board.history_limit
    );

    let handler = CourseworkServerHandler::new(&config);
    serve_stdio(handler).await?;
    Ok(())
}
