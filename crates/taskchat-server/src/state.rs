//! Shared application state.

use std::sync::Arc;

use taskchat_chat::LLMConfig;
use taskchat_core::ServerConfig;
use taskchat_memory::{DraftStore, InMemoryDraftStore};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub llm_config: LLMConfig,
    pub http: reqwest::Client,
    pub memory: Arc<dyn DraftStore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            llm_config: LLMConfig::from_env(),
            http: reqwest::Client::new(),
            memory: Arc::new(InMemoryDraftStore::new()),
        }
    }
}
