use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::{CandidateStatus, Company};

fn placeholder_image() -> String {
    "/placeholder.svg".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateRequest {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub company: Company,
    #[serde(default = "placeholder_image")]
    pub image: String,
    pub status: Option<CandidateStatus>,
}

/// Partial update. A supplied field replaces the stored one wholesale;
/// `company` in particular swaps as a unit rather than merging per field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateRequest {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<Company>,
    pub image: Option<String>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDemoQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDemoResponse {
    pub seeded: usize,
}
