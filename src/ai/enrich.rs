//! The enrichment pass: rewriting change descriptions through a provider.

use tracing::{debug, warn};

use super::{prompts, RewriteClient};
use crate::changelog::ReleaseRecord;

/// Applies the per-item rewrite pass to freshly detected releases.
///
/// Only new releases are ever passed here; entries already persisted in
/// the feed are never rewritten again.
pub struct Enricher {
    client: Box<dyn RewriteClient>,
    locale: String,
}

impl Enricher {
    /// Creates an enricher that rewrites descriptions into `locale`.
    pub fn new(client: Box<dyn RewriteClient>, locale: impl Into<String>) -> Self {
        Self {
            client,
            locale: locale.into(),
        }
    }

    /// Rewrites every change description in `records`.
    ///
    /// Requests are issued one at a time, release by release, item by
    /// item, to stay inside provider rate limits. A failed or empty
    /// rewrite keeps the original description; one bad item never affects
    /// its siblings or aborts the batch. Commit links pass through
    /// unchanged.
    pub async fn enrich(&self, records: Vec<ReleaseRecord>) -> Vec<ReleaseRecord> {
        let mut updated = Vec::with_capacity(records.len());

        for mut record in records {
            println!("✨ Processing version {}...", record.version);

            for items in record.changes.values_mut() {
                for item in items.iter_mut() {
                    item.description = self.rewrite_description(&item.description).await;
                }
            }

            println!("✅ Version {} finished", record.version);
            updated.push(record);
        }

        updated
    }

    /// Rewrites one description, falling back to the original on failure.
    async fn rewrite_description(&self, description: &str) -> String {
        let prompt = prompts::rewrite_prompt(description, &self.locale);

        match self.client.send_request(prompts::SYSTEM_PROMPT, &prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(item = %description, "provider returned empty text, keeping original");
                    description.to_string()
                } else {
                    debug!(item = %description, "description rewritten");
                    text.to_string()
                }
            }
            Err(err) => {
                warn!(item = %description, error = %err, "rewrite failed, keeping original");
                eprintln!("❌ Could not rewrite item: {description}");
                description.to_string()
            }
        }
    }
}
