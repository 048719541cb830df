//! Task chat routes — forward the message to the LLM, then normalize what
//! comes back.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use taskchat_chat::providers;
use taskchat_core::{Error, Result};
use taskchat_extract::{
    build_messages, infer_assignee, manila_today, normalize_date, reconcile_dates, TaskDraft,
};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        // Older clients still post to /chat; /taskChat is the current path.
        .route("/chat", post(task_chat))
        .route("/taskChat", post(task_chat))
}

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskChatRequest {
    pub message: String,
    pub user_id: Option<String>,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let resolved = state.llm_config.resolve_provider();
    Json(serde_json::json!({
        "status": "ok",
        "llmAvailable": resolved.is_some(),
        "llmProvider": resolved.as_ref().map(|(p, _, _)| p.to_string()),
        "defaultModel": resolved.as_ref().map(|(_, m, _)| m.clone()),
    }))
}

/// Single catch-all: any failure in the pipeline becomes `{"error": ...}`.
/// Both success and error bodies go out with HTTP 200.
async fn task_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TaskChatRequest>,
) -> Json<serde_json::Value> {
    match extract_task(&state, &req).await {
        Ok(draft) => {
            info!("Extracted task {:?} for user {:?}", draft.title, req.user_id);
            Json(serde_json::json!({ "response": draft }))
        }
        Err(e) => {
            error!("Task extraction failed: {}", e);
            Json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// The fallible pipeline: model call, JSON parse, date normalization,
/// reconciliation, assignee heuristic, memory update.
async fn extract_task(state: &AppState, req: &TaskChatRequest) -> Result<TaskDraft> {
    let (provider, model, api_key) = state
        .llm_config
        .resolve_provider()
        .ok_or_else(|| Error::Config("No LLM provider configured".into()))?;

    let today = manila_today();

    let prior = req
        .user_id
        .as_deref()
        .and_then(|id| state.memory.recall(id));

    let messages = build_messages(prior.as_ref(), &req.message, today);

    let content = providers::complete(
        &state.http,
        provider,
        &messages,
        &model,
        &api_key,
        state.llm_config.temperature,
        state.llm_config.max_tokens,
    )
    .await?;

    let mut draft = TaskDraft::from_model_json(&content)?;

    let due_norm = normalize_date(&draft.due_date, today);
    let effective_norm = normalize_date(&draft.effective_date, today);
    let (due, effective) = reconcile_dates(
        &draft.due_date,
        &draft.effective_date,
        &due_norm,
        &effective_norm,
        today,
    );
    draft.due_date = due;
    draft.effective_date = effective;

    draft.assigned_to = infer_assignee(&req.message, &draft.assigned_to);

    if let Some(id) = req.user_id.as_deref() {
        state.memory.remember(id, draft.clone());
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_user_id_is_optional() {
        let req: TaskChatRequest =
            serde_json::from_str(r#"{"message": "fix the sink"}"#).unwrap();
        assert_eq!(req.message, "fix the sink");
        assert!(req.user_id.is_none());

        let req: TaskChatRequest =
            serde_json::from_str(r#"{"message": "fix the sink", "user_id": "u1"}"#).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u1"));
    }
}
