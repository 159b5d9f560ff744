use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single journal record owned by one user.
///
/// An empty `id` means the entry has not been persisted yet. `user_id` is written by the
/// gateway on save and never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user_id: String,
    /// Milliseconds since the unix epoch.
    pub created_at: i64,
}

impl JournalEntry {
    /// Creates an unsaved entry stamped with the current time.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            content: content.into(),
            user_id: String::new(),
            created_at: now_millis(),
        }
    }

    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_owner(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// List order: newest `created_at` first, ties by ascending id.
    #[must_use]
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id))
    }
}

#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
