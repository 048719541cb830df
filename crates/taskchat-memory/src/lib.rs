//! Per-user short-term memory: the last draft produced for each user id.
//!
//! Process-lifetime only. The store is unbounded — no eviction, no TTL,
//! no persistence — and concurrent requests for the same user race with
//! last-write-wins semantics. Fine for a prototype; revisit before
//! promoting this beyond one.

use std::collections::HashMap;

use parking_lot::RwLock;

use taskchat_extract::TaskDraft;

/// Injectable store of the last draft per user.
pub trait DraftStore: Send + Sync {
    /// The draft most recently remembered for this user, if any.
    fn recall(&self, user_id: &str) -> Option<TaskDraft>;

    /// Overwrite the stored draft for this user.
    fn remember(&self, user_id: &str, draft: TaskDraft);
}

/// In-memory map-backed store.
#[derive(Default)]
pub struct InMemoryDraftStore {
    drafts: RwLock<HashMap<String, TaskDraft>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn recall(&self, user_id: &str) -> Option<TaskDraft> {
        self.drafts.read().get(user_id).cloned()
    }

    fn remember(&self, user_id: &str, draft: TaskDraft) {
        self.drafts.write().insert(user_id.to_string(), draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recall_unknown_user() {
        let store = InMemoryDraftStore::new();
        assert!(store.recall("nobody").is_none());
    }

    #[test]
    fn test_remember_then_recall() {
        let store = InMemoryDraftStore::new();
        let draft = TaskDraft {
            title: "Fix sink".into(),
            ..TaskDraft::default()
        };
        store.remember("u1", draft.clone());
        assert_eq!(store.recall("u1"), Some(draft));
        assert!(store.recall("u2").is_none());
    }

    #[test]
    fn test_remember_overwrites() {
        let store = InMemoryDraftStore::new();
        store.remember(
            "u1",
            TaskDraft {
                title: "first".into(),
                ..TaskDraft::default()
            },
        );
        store.remember(
            "u1",
            TaskDraft {
                title: "second".into(),
                ..TaskDraft::default()
            },
        );
        assert_eq!(store.recall("u1").unwrap().title, "second");
    }
}
