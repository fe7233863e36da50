//! Description enrichment through an external text-generation service.
//!
//! The provider sits behind the [`RewriteClient`] capability trait so the
//! enrichment pass can be tested against a deterministic fake instead of
//! a live network dependency.

pub mod enrich;
pub mod error;
pub mod openai;
pub mod prompts;
#[cfg(test)]
pub(crate) mod test_utils;

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;

pub use enrich::Enricher;
pub use error::AiError;
pub use openai::OpenAiClient;

/// Trait for description-rewrite service clients.
pub trait RewriteClient: Send + Sync {
    /// Sends one request to the service and returns the raw response text.
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
