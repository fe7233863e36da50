//! OpenAI-compatible chat-completions client used for description rewriting.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{error::AiError, RewriteClient};
use crate::utils::settings;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Rewrites are short; a stuck request is treated like any other failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat API request message
#[derive(Serialize, Debug)]
struct Message {
    role: String,
    content: String,
}

/// Chat API request body
#[derive(Serialize, Debug)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    stream: bool,
}

/// Chat API response choice
#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

/// Chat API response message
#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

/// Chat API response
#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// OpenAI-compatible API client (works with OpenAI and compatible servers)
pub struct OpenAiClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model identifier
    model: String,
    /// Base URL for the API (e.g., "https://api.openai.com")
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client from explicit parts.
    pub fn new(model: String, api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    /// Creates a client from the environment.
    ///
    /// The API key is resolved through `OPENAI_API_KEY` with the settings
    /// file as a fallback; model and base URL default to `gpt-4o` on the
    /// public OpenAI endpoint.
    pub fn from_env(model: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key =
            settings::get_env_var("OPENAI_API_KEY").map_err(|_| AiError::ApiKeyNotFound)?;

        Self::new(
            model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )
    }

    /// Builds the full API URL
    fn api_url(&self) -> String {
        let mut base = self.base_url.clone();

        // Ensure base URL doesn't end with a slash
        if base.ends_with('/') {
            base.pop();
        }

        format!("{base}/v1/chat/completions")
    }
}

impl RewriteClient for OpenAiClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let request = ChatRequest {
                model: self.model.clone(),
                messages: vec![
                    Message {
                        role: "system".to_string(),
                        content: system_prompt.to_string(),
                    },
                    Message {
                        role: "user".to_string(),
                        content: user_prompt.to_string(),
                    },
                ],
                temperature: 0.4,
                stream: false,
            };

            let api_url = self.api_url();
            info!(url = %api_url, model = %self.model, "Sending rewrite request");

            let response = self
                .client
                .post(&api_url)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request)
                .send()
                .await
                .map_err(|e| AiError::NetworkError(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(
                    AiError::ApiRequestFailed(format!("HTTP {status}: {error_text}")).into(),
                );
            }

            let chat_response: ChatResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            let result = chat_response
                .choices
                .first()
                .map(|choice| choice.message.content.clone())
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No choices in response".to_string()).into()
                });

            if let Ok(ref text) = result {
                debug!(response_len = text.len(), "Received rewrite response");
            }

            result
        })
    }
}
