use serde::{Deserialize, Serialize};
use validator::Validate;

// Mirrors the evaluation form: a 1-5 score plus free-text sections, the
// narrative fields each need at least ten characters of substance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[validate(range(min = 1, max = 5))]
    pub overall_score: i32,
    #[validate(length(min = 10, max = 500))]
    pub strengths: String,
    #[validate(length(min = 10, max = 500))]
    pub improvements: String,
    #[validate(length(max = 500))]
    pub comments: Option<String>,
}
