use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserRole;

/// The role is part of the login form, not of the credential check. The
/// identity provider only verifies username/password; whatever role the
/// client asked for is attached to the session as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: UserRole,
}
