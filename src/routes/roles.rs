use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::models::user::UserRole;

#[derive(Debug, Clone, Serialize)]
pub struct RoleInfo {
    pub role: UserRole,
    pub label: &'static str,
    pub permissions: &'static [&'static str],
}

/// Static catalog backing the role-management screen. Roles are fixed, the
/// screen only reassigns them.
#[axum::debug_handler]
pub async fn list_roles() -> impl IntoResponse {
    Json(vec![
        RoleInfo {
            role: UserRole::Admin,
            label: UserRole::Admin.label(),
            permissions: &[
                "View all candidates",
                "Manage candidates",
                "View all feedback",
                "Schedule interviews",
                "Manage user roles",
                "Access analytics",
            ],
        },
        RoleInfo {
            role: UserRole::TaMember,
            label: UserRole::TaMember.label(),
            permissions: &[
                "View all candidates",
                "Manage candidates",
                "View feedback",
                "Schedule interviews",
                "Access analytics",
            ],
        },
        RoleInfo {
            role: UserRole::Panelist,
            label: UserRole::Panelist.label(),
            permissions: &[
                "View assigned candidates",
                "Submit feedback",
                "View own feedback",
            ],
        },
    ])
}
