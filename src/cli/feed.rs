//! Version-feed commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::ai::{Enricher, OpenAiClient};
use crate::changelog;
use crate::feed::{merge, FeedStore};

/// Version-feed operations.
#[derive(Parser)]
pub struct FeedCommand {
    /// Feed subcommand to execute.
    #[command(subcommand)]
    pub command: FeedSubcommands,
}

/// Feed subcommands.
#[derive(Subcommand)]
pub enum FeedSubcommands {
    /// Converts CHANGELOG.md into the JSON feed read by the updates screen.
    Update(UpdateCommand),
}

impl FeedCommand {
    /// Executes the feed command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            FeedSubcommands::Update(cmd) => cmd.execute().await,
        }
    }
}

/// Update command options.
#[derive(Parser)]
pub struct UpdateCommand {
    /// Path to the changelog document.
    #[arg(long, default_value = "CHANGELOG.md")]
    pub changelog: PathBuf,

    /// Path to the persisted version feed.
    #[arg(long, default_value = "public/version-feed.json")]
    pub output: PathBuf,

    /// Skip the AI rewrite pass and publish descriptions as parsed.
    #[arg(long)]
    pub no_ai: bool,

    /// Model used for the rewrite pass.
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Locale the rewritten descriptions are translated to.
    #[arg(long, default_value = "pt-BR")]
    pub locale: String,
}

impl UpdateCommand {
    /// Executes the update command.
    ///
    /// Flow: read changelog, parse, load the existing feed, keep only the
    /// releases not yet persisted, optionally rewrite their descriptions,
    /// and write the merged feed back, new releases first.
    pub async fn execute(self) -> Result<()> {
        if !self.changelog.exists() {
            bail!("Changelog not found: {}", self.changelog.display());
        }

        let content = fs::read_to_string(&self.changelog)
            .with_context(|| format!("Failed to read changelog: {}", self.changelog.display()))?;
        let parsed = changelog::parse(&content);
        debug!(releases = parsed.len(), "parsed changelog");

        let store = FeedStore::new(&self.output);
        let existing = store.load()?;

        let outcome = merge::merge(&parsed, &existing);
        if outcome.new_releases.is_empty() {
            println!("✅ No new versions found. Everything is up to date!");
            return Ok(());
        }

        let new_count = outcome.new_releases.len();
        println!("🆕 {new_count} new version(s) detected.");

        let feed = if self.no_ai {
            outcome.feed
        } else {
            // Resolve credentials before any rewrite work starts.
            let client = OpenAiClient::from_env(self.model.clone(), self.base_url.clone())?;
            let enricher = Enricher::new(Box::new(client), self.locale.clone());
            let enriched = enricher.enrich(outcome.new_releases).await;
            merge::prepend(enriched, existing)
        };

        store.save(&feed)?;
        println!("✅ Feed updated with {new_count} new version(s)");

        Ok(())
    }
}
