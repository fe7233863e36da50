//! CLI interface for feedsync

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod feed;

/// feedsync: changelog-to-feed synchronization
#[derive(Parser)]
#[command(name = "feedsync")]
#[command(about = "Keeps the version feed in sync with CHANGELOG.md", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Version-feed operations
    Feed(feed::FeedCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Feed(feed_cmd) => feed_cmd.execute().await,
        }
    }
}
