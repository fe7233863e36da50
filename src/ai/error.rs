//! Enrichment-specific error handling.

use thiserror::Error;

/// Errors from the description-rewrite provider.
#[derive(Error, Debug)]
pub enum AiError {
    /// API key not found in the environment or settings file.
    #[error("OpenAI API key not found. Set the OPENAI_API_KEY environment variable")]
    ApiKeyNotFound,

    /// Rewrite request failed with an error message.
    #[error("Rewrite request failed: {0}")]
    ApiRequestFailed(String),

    /// Invalid response format from the rewrite API.
    #[error("Invalid response format from rewrite API: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error, including per-request timeouts.
    #[error("Network error: {0}")]
    NetworkError(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
