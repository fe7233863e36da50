//! Changelog parsing.
//!
//! A single forward scan over the document with two pieces of state: the
//! release under construction and the currently open change-type section.
//! Parsing never fails; lines that fit no rule are skipped, since real
//! changelogs mix structure with free-form prose.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{ChangeItem, ChangeKind, ReleaseRecord};

/// `## [1.42.0](https://…/compare/v1.41.0...v1.42.0) (2025-07-18)`
static RELEASE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## \[(?P<version>.*?)\]\((?P<url>.*?)\) \((?P<date>.*?)\)")
        .unwrap()
});

/// `### Features`, `### Bug Fixes`, but also `### Chores` and friends.
static TYPE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### (?P<label>.+)").unwrap());

/// `* description ([abc123](https://…/commit/abc123))`
static LINKED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\* (?P<desc>.*?) \(\[.*?\]\((?P<commit>.*?)\)\)").unwrap()
});

/// Parses raw changelog text into an ordered sequence of release records.
///
/// Rules, applied per line:
///
/// 1. A release heading pushes any open release and opens a new one.
/// 2. A recognized type heading opens (and resets) that section on the
///    current release; an unrecognized `###` heading closes the open
///    section, so items under e.g. `### Chores` are dropped until a
///    recognized heading appears again.
/// 3. A linked item under an open release and section keeps its leading
///    `* ` marker and captures the commit link.
/// 4. Any other line starting with `*` or `-` under an open release and
///    section becomes an item with the marker stripped and no commit
///    link. A linked item that only matches this rule (e.g. it starts
///    with `-`) therefore loses its link target; observed behavior,
///    kept as-is.
/// 5. Everything else is ignored.
pub fn parse(content: &str) -> Vec<ReleaseRecord> {
    let mut releases = Vec::new();
    let mut current: Option<ReleaseRecord> = None;
    let mut kind: Option<ChangeKind> = None;

    for line in content.lines() {
        if let Some(caps) = RELEASE_HEADING.captures(line) {
            if let Some(done) = current.take() {
                releases.push(done);
            }
            current = Some(ReleaseRecord {
                version: caps["version"].to_string(),
                date: caps["date"].to_string(),
                url: Some(caps["url"].to_string()),
                changes: BTreeMap::new(),
            });
            kind = None;
            continue;
        }

        if let Some(caps) = TYPE_HEADING.captures(line) {
            kind = ChangeKind::from_heading(&caps["label"]);
            if let (Some(release), Some(k)) = (current.as_mut(), kind) {
                // A repeated heading restarts its section.
                release.changes.insert(k, Vec::new());
            }
            continue;
        }

        let (Some(release), Some(k)) = (current.as_mut(), kind) else {
            continue;
        };

        if let Some(caps) = LINKED_ITEM.captures(line) {
            release.changes.entry(k).or_default().push(ChangeItem {
                description: format!("* {}", &caps["desc"]),
                commit: caps["commit"].to_string(),
            });
            continue;
        }

        if line.starts_with('*') || line.starts_with('-') {
            let description = line
                .strip_prefix("* ")
                .or_else(|| line.strip_prefix("- "))
                .unwrap_or(line)
                .trim()
                .to_string();
            release.changes.entry(k).or_default().push(ChangeItem {
                description,
                commit: String::new(),
            });
        }
    }

    if let Some(done) = current.take() {
        releases.push(done);
    }

    releases
}
