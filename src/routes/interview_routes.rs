use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::interview_dto::{CreateInterviewRequest, InterviewListResponse, UpdateInterviewRequest},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/interviews",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "The candidate's interviews, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let listing = state.schedule_service.list_for_candidate(candidate_id);
    Ok(Json(InterviewListResponse {
        items: listing.items,
        total: listing.total,
    }))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/interviews",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    request_body = CreateInterviewRequest,
    responses(
        (status = 201, description = "Interview created"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview =
        state
            .interview_service
            .create(candidate_id, payload.description, payload.completed);
    Ok((StatusCode::CREATED, Json(interview)))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}/interviews/{interview_id}",
    params(
        ("id" = i64, Path, description = "Candidate ID"),
        ("interview_id" = i64, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewRequest,
    responses(
        (status = 200, description = "Interview updated, candidate status re-derived"),
        (status = 404, description = "No such interview under this candidate")
    )
)]
#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path((candidate_id, interview_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateInterviewRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state
        .schedule_service
        .update_interview(candidate_id, interview_id, payload)
        .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
    Ok(Json(interview))
}
