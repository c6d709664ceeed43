use serde::{Deserialize, Serialize};

/// Lifecycle of a candidate. New records start out `Scheduled`; the schedule
/// service moves them to `Completed` once every interview is done.
/// `Cancelled` is only ever set by an explicit update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Scheduled => "scheduled",
            CandidateStatus::Completed => "completed",
            CandidateStatus::Cancelled => "cancelled",
        }
    }
}

/// Employment descriptor. Updates replace this as a unit, field by field
/// merging never descends into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
}

// Wire keys stay camelCase for parity with the demo directory API the seed
// profiles come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Company,
    pub image: String,
    pub status: CandidateStatus,
}
