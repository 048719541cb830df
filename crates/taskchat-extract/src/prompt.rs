//! The system prompt and outbound message assembly.

use chrono::NaiveDate;

use taskchat_chat::ChatMessage;

use crate::draft::TaskDraft;

/// Build the fixed system prompt. The user may write in English, Tagalog,
/// or a mix; date expressions are kept verbatim for server-side
/// normalization. Today's date is interpolated so the model has temporal
/// context for phrases it chooses to echo.
fn system_prompt(today: NaiveDate) -> String {
    format!(
        "You are a task extraction assistant. The user describes a task in \
         English, Tagalog, or a mix of both (Taglish). Extract the task \
         fields and respond with STRICT JSON only — no prose, no code \
         fences — using exactly these keys:\n\
         {{\"title\": string, \"details\": string, \"due_date\": string, \
         \"effective_date\": string, \"assigned_to\": string}}\n\
         Copy date expressions exactly as the user wrote them (for example \
         \"bukas\", \"tomorrow\", \"huwebes\", \"April 10\") — do not \
         convert them. Use an empty string for anything the user did not \
         state. Today's date is {} (Philippine time). Kung Tagalog ang \
         mensahe, isalin ang title at details sa Ingles.",
        today.format("%Y-%m-%d")
    )
}

/// Assemble the outbound conversation: system prompt, then the prior draft
/// for this user (if any) as extra context, then the new user message.
pub fn build_messages(
    prior: Option<&TaskDraft>,
    message: &str,
    today: NaiveDate,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(system_prompt(today))];

    if let Some(draft) = prior {
        messages.push(ChatMessage::system(format!(
            "The user's previous task, for follow-up context: {}",
            draft.to_context_json()
        )));
    }

    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 8).unwrap()
    }

    #[test]
    fn test_messages_without_memory() {
        let messages = build_messages(None, "Fix the aircon tomorrow", today());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("2026-04-08"));
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Fix the aircon tomorrow");
    }

    #[test]
    fn test_prior_draft_injected_before_user_message() {
        let prior = TaskDraft {
            title: "Fix the aircon".into(),
            due_date: "2026-04-09".into(),
            ..TaskDraft::default()
        };
        let messages = build_messages(Some(&prior), "move it to Friday", today());
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, "system");
        assert!(messages[1].content.contains("Fix the aircon"));
        assert!(messages[1].content.contains("2026-04-09"));
        assert_eq!(messages[2].role, "user");
    }

    #[test]
    fn test_prompt_demands_strict_json_keys() {
        let messages = build_messages(None, "hello", today());
        let prompt = &messages[0].content;
        for key in ["title", "details", "due_date", "effective_date", "assigned_to"] {
            assert!(prompt.contains(key), "prompt missing key {key}");
        }
    }
}
