use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::user::{SessionUser, UserRole};
use crate::storage::local_map::LocalMap;

const SESSION_KEY: &str = "user";

/// Profile returned by the demo identity endpoint. No role in here, the
/// provider only vouches for the credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthService {
    client: Client,
    base_url: String,
    expires_in_mins: u32,
    map: LocalMap,
}

impl AuthService {
    pub fn new(base_url: String, expires_in_mins: u32, client: Client, map: LocalMap) -> Self {
        Self {
            client,
            base_url,
            expires_in_mins,
            map,
        }
    }

    /// Checks the credentials against the remote endpoint. Bad credentials,
    /// transport failures and malformed responses all collapse into the one
    /// generic failure the login screen shows.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "username": username,
                "password": password,
                "expiresInMins": self.expires_in_mins,
            }))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "login request failed");
                Error::Unauthorized("Invalid credentials".to_string())
            })?;

        if !response.status().is_success() {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "login response was not a profile");
                Error::Unauthorized("Invalid credentials".to_string())
            })
    }

    /// Builds the session profile from the verified identity plus the
    /// self-asserted role, and persists it.
    pub fn establish_session(&self, auth: AuthResponse, role: UserRole) -> SessionUser {
        let user = SessionUser {
            id: auth.id,
            username: auth.username,
            email: auth.email,
            first_name: auth.first_name,
            last_name: auth.last_name,
            role,
            token: auth.token,
        };
        self.save_session(&user);
        user
    }

    pub fn save_session(&self, user: &SessionUser) {
        self.map.write(SESSION_KEY, user);
    }

    /// Stored profile, or `None` when absent or unreadable.
    pub fn get_session(&self) -> Option<SessionUser> {
        self.map.read(SESSION_KEY, None)
    }

    pub fn clear_session(&self) {
        self.map.remove(SESSION_KEY);
    }
}
