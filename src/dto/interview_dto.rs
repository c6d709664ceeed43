use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::interview::Interview;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewRequest {
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateInterviewRequest {
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewListResponse {
    pub items: Vec<Interview>,
    pub total: usize,
}
