//! The structured task draft extracted by the model.

use serde::{Deserialize, Serialize};

use taskchat_core::Result;

/// Task fields extracted from free text by the model.
///
/// Every field defaults to the empty string when absent — the model's JSON
/// output is trusted without schema validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub assigned_to: String,
}

impl TaskDraft {
    /// Parse the model's response content as a draft. Malformed JSON
    /// surfaces as an error to the catch-all.
    pub fn from_model_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content.trim())?)
    }

    /// Serialize for injection as conversation context on follow-ups.
    pub fn to_context_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let draft = TaskDraft::from_model_json(r#"{"title": "Fix sink"}"#).unwrap();
        assert_eq!(draft.title, "Fix sink");
        assert_eq!(draft.details, "");
        assert_eq!(draft.due_date, "");
        assert_eq!(draft.effective_date, "");
        assert_eq!(draft.assigned_to, "");
    }

    #[test]
    fn test_full_draft_parses() {
        let draft = TaskDraft::from_model_json(
            r#"{"title":"t","details":"d","due_date":"tomorrow","effective_date":"today","assigned_to":"Ana"}"#,
        )
        .unwrap();
        assert_eq!(draft.due_date, "tomorrow");
        assert_eq!(draft.assigned_to, "Ana");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(TaskDraft::from_model_json("not json at all").is_err());
    }

    #[test]
    fn test_context_json_round_trip() {
        let draft = TaskDraft {
            title: "Buy supplies".into(),
            ..TaskDraft::default()
        };
        let json = draft.to_context_json();
        let back = TaskDraft::from_model_json(&json).unwrap();
        assert_eq!(back, draft);
    }
}
