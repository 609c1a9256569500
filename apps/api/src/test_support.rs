//! Shared fixtures for handler and pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::llm_client::{CompletionModel, LlmError};
use crate::state::AppState;
use crate::storage::PostStore;

pub const CANNED_POST: &str = "# Great Gear\n\nCheck out {AFF_LINK_1} and {AFF_LINK_2}.\nAlso {AFF_LINK_3}, but not {AFF_LINK_4}.\n";

/// Completion model that returns canned text and records every prompt it saw.
pub struct StubModel {
    reply: Result<String, String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl StubModel {
    fn new(reply: Result<String, String>) -> Self {
        Self {
            reply,
            delay: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    /// Makes every call take `delay` (tokio time) before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Highest number of calls that were ever running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for StubModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Api {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}

pub fn temp_store(dir: &TempDir) -> PostStore {
    PostStore::new(dir.path().join("posts"), dir.path().join("html"))
}

pub fn test_state(dir: &TempDir, model: Arc<StubModel>) -> AppState {
    AppState {
        llm: model,
        store: temp_store(dir),
    }
}
