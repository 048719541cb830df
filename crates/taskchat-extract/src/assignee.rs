//! Heuristic assignee inference from the raw user message.

/// Role keywords that indicate the user is talking about a role rather
/// than naming a person; a match forces the assignee blank.
pub const ROLE_KEYWORDS: &[&str] = &[
    "manager",
    "supervisor",
    "engineer",
    "technician",
    "accountant",
    "secretary",
    "janitor",
    "driver",
];

/// Placeholder used when the user asked to assign but the model named
/// nobody.
pub const UNKNOWN_ASSIGNEE: &str = "Unknown Assignee";

/// Apply the assignee heuristic to the model's output.
///
/// "assign" anywhere in the message with a blank model assignee yields the
/// placeholder; otherwise a role keyword mention overrides whatever the
/// model returned with blank.
pub fn infer_assignee(message: &str, model_assignee: &str) -> String {
    let lowered = message.to_lowercase();

    if lowered.contains("assign") && model_assignee.trim().is_empty() {
        return UNKNOWN_ASSIGNEE.to_string();
    }

    if ROLE_KEYWORDS.iter().any(|role| lowered.contains(role)) {
        return String::new();
    }

    model_assignee.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_keyword_without_name() {
        assert_eq!(
            infer_assignee("Please assign someone to fix the aircon", ""),
            UNKNOWN_ASSIGNEE
        );
        assert_eq!(
            infer_assignee("ASSIGN this to whoever is free", "  "),
            UNKNOWN_ASSIGNEE
        );
    }

    #[test]
    fn test_assign_keyword_with_name_kept() {
        assert_eq!(
            infer_assignee("Assign this to Ana", "Ana"),
            "Ana"
        );
    }

    #[test]
    fn test_role_keyword_forces_blank() {
        assert_eq!(infer_assignee("Have the manager review the report", "Bob"), "");
        assert_eq!(infer_assignee("ipaayos sa technician ang ilaw", ""), "");
    }

    #[test]
    fn test_plain_message_passthrough() {
        assert_eq!(infer_assignee("Buy office supplies tomorrow", "Carlos"), "Carlos");
        assert_eq!(infer_assignee("Buy office supplies tomorrow", ""), "");
    }
}
