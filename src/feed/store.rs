//! Reading and writing the persisted version feed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::changelog::ReleaseRecord;

/// On-disk JSON store for the version feed.
///
/// The feed is the only durable state of the tool; it is fully rewritten
/// on each successful run.
pub struct FeedStore {
    path: PathBuf,
}

impl FeedStore {
    /// Creates a store for the feed at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the feed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted feed.
    ///
    /// A missing file is an empty feed. An unreadable, empty, malformed,
    /// or non-array file is downgraded to an empty feed with a warning so
    /// a damaged feed never blocks an update run.
    pub fn load(&self) -> Result<Vec<ReleaseRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "feed file not found, starting empty");
            return Ok(Vec::new());
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read existing feed");
                println!("⚠️  Could not read the existing feed file. Ignoring its contents.");
                return Ok(Vec::new());
            }
        };

        if raw.trim().is_empty() {
            println!("⚠️  Feed file exists but is empty. Starting from scratch.");
            return Ok(Vec::new());
        }

        let value: serde_json::Value = match serde_json::from_str(raw.trim()) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "existing feed is not valid JSON");
                println!("⚠️  Could not parse the existing feed file. Ignoring its contents.");
                return Ok(Vec::new());
            }
        };

        if !value.is_array() {
            println!("⚠️  Existing feed is not an array. Ignoring its contents.");
            return Ok(Vec::new());
        }

        match serde_json::from_value::<Vec<ReleaseRecord>>(value) {
            Ok(feed) => {
                debug!(path = %self.path.display(), releases = feed.len(), "loaded feed");
                Ok(feed)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "existing feed has an unexpected shape");
                println!("⚠️  Existing feed entries are malformed. Ignoring its contents.");
                Ok(Vec::new())
            }
        }
    }

    /// Persists the full feed, pretty-printed for human diffability.
    ///
    /// The feed is written to a temporary file in the target directory and
    /// renamed over the destination, so a failed write leaves any prior
    /// valid feed intact. Write failures are fatal to the run.
    pub fn save(&self, feed: &[ReleaseRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(feed).context("Failed to serialize feed")?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create feed directory: {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write feed contents")?;
        tmp.write_all(b"\n").context("Failed to write feed contents")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to persist feed file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), releases = feed.len(), "feed written");
        Ok(())
    }
}
