use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        CreateCandidateRequest, SeedDemoQuery, SeedDemoResponse, UpdateCandidateRequest,
    },
    error::{Error, Result},
    services::directory_service,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "All candidates, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.candidate_service.list()))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .get(id)
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidateRequest,
    responses(
        (status = 201, description = "Candidate created"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidateRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload);
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    request_body = UpdateCandidateRequest,
    responses(
        (status = 200, description = "Candidate updated"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCandidateRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .update(id, payload)
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 204, description = "Candidate deleted"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    if !state.candidate_service.delete(id) {
        return Err(Error::NotFound("Candidate not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Replaces the whole candidate collection with profiles pulled from the
/// demo directory. Meant for bootstrapping a fresh install or a demo run.
#[utoipa::path(
    post,
    path = "/api/candidates/seed-demo",
    params(
        ("limit" = Option<u32>, Query, description = "Profiles to fetch"),
        ("skip" = Option<u32>, Query, description = "Profiles to skip")
    ),
    responses(
        (status = 200, description = "Store seeded from the directory"),
        (status = 502, description = "Directory unreachable")
    )
)]
#[axum::debug_handler]
pub async fn seed_demo_candidates(
    State(state): State<AppState>,
    Query(query): Query<SeedDemoQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(30);
    let skip = query.skip.unwrap_or(0);
    let profiles = state.directory_service.fetch_profiles(limit, skip).await?;
    let candidates: Vec<_> = profiles
        .into_iter()
        .map(directory_service::profile_to_candidate)
        .collect();
    let seeded = candidates.len();
    state.candidate_service.seed(candidates);
    tracing::info!(seeded, "candidate store seeded from directory");
    Ok(Json(SeedDemoResponse { seeded }))
}
