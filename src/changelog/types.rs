//! Typed representation of changelog releases and their change entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recognized change-type sections of a changelog.
///
/// The vocabulary is closed on purpose: the feed only tracks the two
/// section kinds the updates screen renders. Headings outside this set are
/// not retained as feed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// `### Bug Fixes` sections.
    #[serde(rename = "bug fixes")]
    BugFixes,
    /// `### Features` sections.
    #[serde(rename = "features")]
    Features,
}

impl ChangeKind {
    /// Maps a `###` heading label to its change kind, case-insensitively.
    ///
    /// Returns `None` for anything outside the recognized vocabulary.
    pub fn from_heading(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "features" => Some(Self::Features),
            "bug fixes" => Some(Self::BugFixes),
            _ => None,
        }
    }

    /// The lower-cased label used as the feed's map key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::BugFixes => "bug fixes",
        }
    }
}

/// A single bullet-level changelog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Human-readable text of the change.
    pub description: String,
    /// Commit link extracted from the entry, or empty when none was found.
    #[serde(default)]
    pub commit: String,
}

/// One versioned entry from the changelog, with its date, optional link,
/// and categorized changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Version identifier as written in the heading, e.g. `1.42.0`.
    pub version: String,
    /// Release date as captured from the heading; informational only.
    pub date: String,
    /// Link associated with the release heading, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Change entries grouped by recognized section kind.
    #[serde(default)]
    pub changes: BTreeMap<ChangeKind, Vec<ChangeItem>>,
}

impl ReleaseRecord {
    /// Key used to detect releases already present in the feed.
    ///
    /// Combines version and URL so the same version with and without a
    /// compare link is not collapsed into one entry.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.version, self.url.as_deref().unwrap_or(""))
    }
}
