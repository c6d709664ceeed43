use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::feedback_dto::SubmitFeedbackRequest,
    error::Result,
    models::user::SessionUser,
    services::feedback_service::NewFeedback,
    utils::{sanitize, time},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/feedback",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "The candidate's feedback, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_feedback(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.feedback_service.list_by_candidate(candidate_id)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/feedback",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "Feedback recorded"),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Submitter is not a panelist")
    )
)]
#[axum::debug_handler]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
    Extension(user): Extension<SessionUser>,
    Json(payload): Json<SubmitFeedbackRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let title = format!("Score {} / 5", payload.overall_score);
    let mut sections = vec![
        format!("Strengths: {}", sanitize::strip_markup(&payload.strengths)),
        format!(
            "Improvements: {}",
            sanitize::strip_markup(&payload.improvements)
        ),
    ];
    if let Some(comments) = payload.comments.as_deref() {
        let comments = sanitize::strip_markup(comments);
        if !comments.is_empty() {
            sections.push(format!("Comments: {}", comments));
        }
    }
    let body = sections.join("\n\n");

    let feedback = state.feedback_service.create(NewFeedback {
        candidate_id,
        title,
        body,
        submitted_by: user.id,
        submitted_at: time::to_rfc3339(time::now()),
        reactions: None,
    });
    tracing::info!(candidate_id, feedback_id = feedback.id, "feedback recorded");
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Bulk view-count bump, fired when someone opens the candidate's feedback
/// tab. Not per-record on purpose.
#[utoipa::path(
    post,
    path = "/api/candidates/{id}/feedback/views",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 204, description = "View counters bumped")
    )
)]
#[axum::debug_handler]
pub async fn record_views(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> impl IntoResponse {
    state
        .feedback_service
        .increment_views_for_candidate(candidate_id);
    StatusCode::NO_CONTENT
}
