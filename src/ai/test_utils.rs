//! Shared test utilities for the `ai` module.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::RewriteClient;

/// Mock rewrite client with a pre-programmed queue of responses.
///
/// Responses are returned in FIFO order. When the queue is exhausted,
/// subsequent calls return `Err("no more mock responses")`.
///
/// Every call records the `(system_prompt, user_prompt)` pair so tests can
/// inspect which prompts were dispatched after the client has been moved
/// into an [`Enricher`](super::enrich::Enricher).
pub(crate) struct MockRewriteClient {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    recorded_prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRewriteClient {
    /// Creates a new mock client that will return the given responses in order.
    pub(crate) fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            recorded_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle for inspecting which prompts were sent to the mock
    /// client after it has been moved into an `Enricher`.
    pub(crate) fn prompt_handle(&self) -> PromptHandle {
        PromptHandle {
            recorded_prompts: self.recorded_prompts.clone(),
        }
    }
}

impl RewriteClient for MockRewriteClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.recorded_prompts
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_prompt.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no more mock responses")))
        })
    }
}

/// Handle for reading the prompts recorded by a [`MockRewriteClient`].
pub(crate) struct PromptHandle {
    recorded_prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl PromptHandle {
    /// Returns a snapshot of the recorded `(system, user)` prompt pairs.
    pub(crate) fn prompts(&self) -> Vec<(String, String)> {
        self.recorded_prompts.lock().unwrap().clone()
    }
}
