use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::models::user::UserRole;
use crate::services::auth_service::AuthService;

/// Gate checking the bearer token against the locally stored session. This
/// is the same trust level the dashboard UI had: the session (role included)
/// is self-asserted at login, so the gate keeps honest callers on their
/// screen rather than enforcing real authorization.
#[derive(Clone)]
pub struct RoleGate {
    auth: AuthService,
    allowed: &'static [UserRole],
}

/// Any signed-in role passes.
pub fn any_session(auth: AuthService) -> RoleGate {
    RoleGate { auth, allowed: &[] }
}

pub fn roles(auth: AuthService, allowed: &'static [UserRole]) -> RoleGate {
    RoleGate { auth, allowed }
}

pub async fn require_session(
    State(gate): State<RoleGate>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"missing_authorization"})),
        )
            .into_response();
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"bad_authorization"})),
        )
            .into_response();
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"unsupported_scheme"})),
        )
            .into_response();
    };

    let Some(user) = gate.auth.get_session() else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"no_active_session"})),
        )
            .into_response();
    };
    if user.token != token {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"invalid_token"})),
        )
            .into_response();
    }
    if !gate.allowed.is_empty() && !gate.allowed.contains(&user.role) {
        return (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"}))).into_response();
    }

    req.extensions_mut().insert(user);
    next.run(req).await
}
