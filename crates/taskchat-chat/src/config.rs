//! LLM provider selection from the environment.

use serde::{Deserialize, Serialize};

use crate::types::LLMProvider;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Generation limits for the extraction call. The task fields are short,
/// so the token cap stays small.
pub const DEFAULT_MAX_TOKENS: usize = 256;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// LLM configuration assembled from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// "auto", "openai", "anthropic", or "groq".
    pub preferred_provider: String,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub openai_model: String,
    pub anthropic_model: String,
    pub groq_model: String,
    pub max_tokens: usize,
    pub temperature: f64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "auto".into(),
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl LLMConfig {
    /// Build config from environment variables. `.env` loading happens in
    /// the binary before this is called.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(p) = std::env::var("TASKCHAT_PROVIDER") {
            config.preferred_provider = p;
        }
        config.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        config.anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        config.groq_api_key = std::env::var("GROQ_API_KEY").ok();

        if let Ok(m) = std::env::var("TASKCHAT_OPENAI_MODEL") {
            config.openai_model = m;
        }
        if let Ok(m) = std::env::var("TASKCHAT_ANTHROPIC_MODEL") {
            config.anthropic_model = m;
        }
        if let Ok(m) = std::env::var("TASKCHAT_GROQ_MODEL") {
            config.groq_model = m;
        }
        if let Some(t) = std::env::var("TASKCHAT_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_tokens = t;
        }
        if let Some(t) = std::env::var("TASKCHAT_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.temperature = t;
        }

        config
    }

    /// Resolve which provider, model, and API key to use.
    pub fn resolve_provider(&self) -> Option<(LLMProvider, String, String)> {
        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "openai" => self
                    .openai_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::OpenAI, self.openai_model.clone(), k.clone())),
                "anthropic" => self
                    .anthropic_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone())),
                "groq" => self
                    .groq_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Groq, self.groq_model.clone(), k.clone())),
                _ => None,
            };
        }

        // Auto mode: Anthropic > Groq > OpenAI
        if let Some(k) = &self.anthropic_api_key {
            return Some((LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone()));
        }
        if let Some(k) = &self.groq_api_key {
            return Some((LLMProvider::Groq, self.groq_model.clone(), k.clone()));
        }
        if let Some(k) = &self.openai_api_key {
            return Some((LLMProvider::OpenAI, self.openai_model.clone(), k.clone()));
        }

        None
    }
}
