//! Non-streaming completion calls to external LLM providers.
//!
//! OpenAI and Groq share the chat-completions wire format. Anthropic uses
//! the Messages API with the system prompt split out of the message list.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use taskchat_core::{Error, Result};

use crate::types::{ChatMessage, LLMProvider};

/// Send a conversation to the given provider and return the assistant text.
///
/// No retries and no timeout beyond the client's defaults; a slow or
/// failing call surfaces as an error to the caller.
pub async fn complete(
    client: &Client,
    provider: LLMProvider,
    messages: &[ChatMessage],
    model: &str,
    api_key: &str,
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    match provider {
        LLMProvider::OpenAI => {
            complete_openai_compat(
                client,
                "https://api.openai.com/v1/chat/completions",
                messages,
                model,
                api_key,
                temperature,
                max_tokens,
            )
            .await
        }
        LLMProvider::Groq => {
            complete_openai_compat(
                client,
                "https://api.groq.com/openai/v1/chat/completions",
                messages,
                model,
                api_key,
                temperature,
                max_tokens,
            )
            .await
        }
        LLMProvider::Anthropic => {
            complete_anthropic(client, messages, model, api_key, temperature, max_tokens).await
        }
    }
}

/// Call OpenAI-compatible APIs (OpenAI, Groq).
async fn complete_openai_compat(
    client: &Client,
    url: &str,
    messages: &[ChatMessage],
    model: &str,
    api_key: &str,
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    let msgs: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| json!({"role": m.role, "content": m.content}))
        .collect();

    let body = json!({
        "model": model,
        "messages": msgs,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });

    debug!("Calling {} with model {}", url, model);

    let response = client
        .post(url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Provider(format!("API error {}: {}", status, body)));
    }

    let parsed: serde_json::Value = response
        .json()
        .await
        .map_err(|e| Error::Http(format!("Response read error: {}", e)))?;

    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Provider("No completion content in response".into()))
}

/// Call Anthropic's Messages API.
async fn complete_anthropic(
    client: &Client,
    messages: &[ChatMessage],
    model: &str,
    api_key: &str,
    temperature: f64,
    max_tokens: usize,
) -> Result<String> {
    // Separate system messages from the conversation
    let system_msg: Option<String> = {
        let parts: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == "system")
            .map(|m| m.content.as_str())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    };

    let conv_msgs: Vec<serde_json::Value> = messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| json!({"role": m.role, "content": m.content}))
        .collect();

    let mut body = json!({
        "model": model,
        "messages": conv_msgs,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });

    if let Some(sys) = system_msg {
        body["system"] = json!(sys);
    }

    debug!("Calling Anthropic with model {}", model);

    let response = client
        .post("https://api.anthropic.com/v1/messages")
        .header("x-api-key", api_key)
        .header("anthropic-version", "2023-06-01")
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Provider(format!("API error {}: {}", status, body)));
    }

    let parsed: serde_json::Value = response
        .json()
        .await
        .map_err(|e| Error::Http(format!("Response read error: {}", e)))?;

    parsed["content"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Provider("No completion content in response".into()))
}
