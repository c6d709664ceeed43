use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::candidate::CandidateStatus, AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub interviews_total: usize,
    pub interviews_completed: usize,
    pub interviews_pending: usize,
    pub feedback_total: usize,
    /// Mean of the "Score N / 5" titles, one decimal. Absent until any
    /// feedback carries a parseable score.
    pub average_feedback_score: Option<f64>,
}

// Evaluation titles are "Score N / 5"; anything else just does not count
// towards the average.
fn parse_score(title: &str) -> Option<f64> {
    title
        .strip_prefix("Score ")?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Counts derived from the stores")
    )
)]
#[axum::debug_handler]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list();
    let scheduled = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Scheduled)
        .count();
    let completed = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Completed)
        .count();
    let cancelled = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Cancelled)
        .count();

    let mut interviews_total = 0;
    let mut interviews_completed = 0;
    let mut feedback_total = 0;
    let mut scores: Vec<f64> = Vec::new();
    for candidate in &candidates {
        let listing = state.interview_service.list_by_candidate(candidate.id);
        interviews_total += listing.total;
        interviews_completed += listing.items.iter().filter(|i| i.completed).count();

        let feedback = state.feedback_service.list_by_candidate(candidate.id);
        feedback_total += feedback.len();
        scores.extend(feedback.iter().filter_map(|f| parse_score(&f.title)));
    }

    let average_feedback_score = if scores.is_empty() {
        None
    } else {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    Ok(Json(DashboardStats {
        total_candidates: candidates.len(),
        scheduled,
        completed,
        cancelled,
        interviews_total,
        interviews_completed,
        interviews_pending: interviews_total - interviews_completed,
        feedback_total,
        average_feedback_score,
    }))
}
