//! Chat-completion client for external LLM providers (OpenAI/Anthropic/Groq).
//!
//! One non-streaming call per request — the task endpoint returns a single
//! JSON body, so there is nothing to stream.

pub mod config;
pub mod providers;
pub mod types;

pub use config::LLMConfig;
pub use types::*;
