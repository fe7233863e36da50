//! Deduplicating merge of parsed releases into the persisted feed.

use std::collections::HashSet;

use crate::changelog::ReleaseRecord;

/// Result of merging freshly parsed releases against the persisted feed.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Releases absent from the persisted feed, in document order.
    pub new_releases: Vec<ReleaseRecord>,
    /// The merged feed: new releases first, then the prior feed unchanged.
    pub feed: Vec<ReleaseRecord>,
}

/// Splits `parsed` into genuinely new releases and prepends them to
/// `existing`.
///
/// A release counts as known when its `version|url` key already appears
/// in the persisted feed. When nothing is new, the merged feed is the
/// existing feed unchanged and callers should treat the run as a no-op.
pub fn merge(parsed: &[ReleaseRecord], existing: &[ReleaseRecord]) -> MergeOutcome {
    let known: HashSet<String> = existing.iter().map(ReleaseRecord::dedup_key).collect();

    let new_releases: Vec<ReleaseRecord> = parsed
        .iter()
        .filter(|release| !known.contains(&release.dedup_key()))
        .cloned()
        .collect();

    let feed = prepend(new_releases.clone(), existing.to_vec());

    MergeOutcome { new_releases, feed }
}

/// Assembles the final feed: new releases ahead of the prior ones, order
/// preserved within each part. No date sort; the feed is newest-first by
/// construction.
pub fn prepend(
    new_releases: Vec<ReleaseRecord>,
    existing: Vec<ReleaseRecord>,
) -> Vec<ReleaseRecord> {
    let mut feed = new_releases;
    feed.extend(existing);
    feed
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::HashSet;

    use super::*;

    fn release(version: &str, url: Option<&str>) -> ReleaseRecord {
        ReleaseRecord {
            version: version.to_string(),
            date: "2025-01-01".to_string(),
            url: url.map(str::to_string),
            changes: BTreeMap::new(),
        }
    }

    #[test]
    fn test_new_before_old_ordering() {
        let parsed = vec![
            release("3.0.0", Some("https://example.com/3")),
            release("2.0.0", Some("https://example.com/2")),
        ];
        let existing = vec![release("1.0.0", Some("https://example.com/1"))];

        let outcome = merge(&parsed, &existing);
        assert_eq!(outcome.new_releases.len(), 2);
        let versions: Vec<&str> = outcome.feed.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, ["3.0.0", "2.0.0", "1.0.0"]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let parsed = vec![release("2.0.0", None), release("1.0.0", None)];
        let first = merge(&parsed, &[]);
        assert_eq!(first.new_releases.len(), 2);

        let second = merge(&parsed, &first.feed);
        assert!(second.new_releases.is_empty());
        assert_eq!(second.feed, first.feed);
    }

    #[test]
    fn test_merged_feed_has_unique_keys() {
        let parsed = vec![
            release("1.0.0", Some("https://example.com/1")),
            release("1.1.0", Some("https://example.com/1.1")),
        ];
        let existing = vec![
            release("1.0.0", Some("https://example.com/1")),
            release("0.9.0", None),
        ];

        let outcome = merge(&parsed, &existing);
        let keys: HashSet<String> = outcome.feed.iter().map(ReleaseRecord::dedup_key).collect();
        assert_eq!(keys.len(), outcome.feed.len());
    }

    #[test]
    fn test_same_version_different_url_is_new() {
        let parsed = vec![release("1.0.0", Some("https://example.com/1"))];
        let existing = vec![release("1.0.0", None)];

        let outcome = merge(&parsed, &existing);
        assert_eq!(outcome.new_releases.len(), 1);
        assert_eq!(outcome.feed.len(), 2);
    }

    #[test]
    fn test_no_new_versions_leaves_feed_unchanged() {
        let parsed = vec![release("1.0.0", None)];
        let existing = vec![release("1.0.0", None)];

        let outcome = merge(&parsed, &existing);
        assert!(outcome.new_releases.is_empty());
        assert_eq!(outcome.feed, existing);
    }
}
