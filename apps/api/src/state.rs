use std::sync::Arc;

use crate::llm_client::CompletionModel;
use crate::storage::PostStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionModel>,
    pub store: PostStore,
}
