use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: i64,
    /// Owning candidate. Not enforced against the candidate collection,
    /// orphaned interviews are tolerated.
    pub candidate_id: i64,
    pub description: String,
    pub completed: bool,
}
