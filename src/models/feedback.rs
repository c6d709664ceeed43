use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub likes: i64,
    pub dislikes: i64,
}

impl Default for Reactions {
    fn default() -> Self {
        Self {
            likes: 0,
            dislikes: 0,
        }
    }
}

/// A panelist's written evaluation. Immutable once stored except for the
/// view counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub candidate_id: i64,
    pub title: String,
    pub body: String,
    pub reactions: Reactions,
    pub views: i64,
    pub submitted_by: i64,
    /// RFC 3339 timestamp, stored as text.
    pub submitted_at: String,
}
