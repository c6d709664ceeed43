use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::auth_dto::LoginRequest,
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session established"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let auth = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;
    let user = state.auth_service.establish_session(auth, payload.role);
    tracing::info!(username = %user.username, role = ?user.role, "session established");
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session profile"),
        (status = 401, description = "No active session")
    )
)]
#[axum::debug_handler]
pub async fn session(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let user = state
        .auth_service
        .get_session()
        .ok_or_else(|| Error::Unauthorized("No active session".to_string()))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.auth_service.clear_session();
    StatusCode::NO_CONTENT
}
