pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use axum::routing::{get, patch, post};
use axum::Router;
use reqwest::Client;

use crate::models::user::UserRole;
use crate::services::{
    auth_service::AuthService, candidate_service::CandidateService,
    directory_service::DirectoryService, feedback_service::FeedbackService,
    interview_service::InterviewService, schedule_service::ScheduleService,
};
use crate::storage::local_map::LocalMap;

#[derive(Clone)]
pub struct AppState {
    pub map: LocalMap,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub feedback_service: FeedbackService,
    pub schedule_service: ScheduleService,
    pub auth_service: AuthService,
    pub directory_service: DirectoryService,
}

impl AppState {
    pub fn new(map: LocalMap) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let candidate_service = CandidateService::open(map.clone());
        let interview_service = InterviewService::open(map.clone());
        let feedback_service = FeedbackService::open(map.clone());
        let schedule_service =
            ScheduleService::new(candidate_service.clone(), interview_service.clone());
        let auth_service = AuthService::new(
            config.auth_api_url.clone(),
            config.session_expires_mins,
            http_client.clone(),
            map.clone(),
        );
        let directory_service = DirectoryService::new(config.auth_api_url.clone(), http_client);

        Self {
            map,
            candidate_service,
            interview_service,
            feedback_service,
            schedule_service,
            auth_service,
            directory_service,
        }
    }
}

const STAFF_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::TaMember];
const PANELIST_ONLY: &[UserRole] = &[UserRole::Panelist];
const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// Assembles the API surface. The gates mirror what the dashboard screens
/// allowed per role; the stores underneath accept any call regardless.
pub fn app_router(state: AppState) -> Router {
    let auth = state.auth_service.clone();

    let open_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/auth/login", post(routes::auth_routes::login))
        .route("/api/auth/session", get(routes::auth_routes::session))
        .route("/api/auth/logout", post(routes::auth_routes::logout));

    let viewer_api = Router::new()
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate),
        )
        .route(
            "/api/candidates/:id/interviews",
            get(routes::interview_routes::list_interviews),
        )
        .route(
            "/api/candidates/:id/interviews/:interview_id",
            patch(routes::interview_routes::update_interview),
        )
        .route(
            "/api/candidates/:id/feedback",
            get(routes::feedback_routes::list_feedback),
        )
        .route(
            "/api/candidates/:id/feedback/views",
            post(routes::feedback_routes::record_views),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::get_stats))
        .layer(axum::middleware::from_fn_with_state(
            middleware::auth::any_session(auth.clone()),
            middleware::auth::require_session,
        ));

    let staff_api = Router::new()
        .route(
            "/api/candidates",
            post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            patch(routes::candidate_routes::update_candidate)
                .delete(routes::candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidates/:id/interviews",
            post(routes::interview_routes::create_interview),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::auth::roles(auth.clone(), STAFF_ROLES),
            middleware::auth::require_session,
        ));

    let panelist_api = Router::new()
        .route(
            "/api/candidates/:id/feedback",
            post(routes::feedback_routes::submit_feedback),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::auth::roles(auth.clone(), PANELIST_ONLY),
            middleware::auth::require_session,
        ));

    let admin_api = Router::new()
        .route(
            "/api/candidates/seed-demo",
            post(routes::candidate_routes::seed_demo_candidates),
        )
        .route("/api/roles", get(routes::roles::list_roles))
        .layer(axum::middleware::from_fn_with_state(
            middleware::auth::roles(auth, ADMIN_ONLY),
            middleware::auth::require_session,
        ));

    open_api
        .merge(viewer_api)
        .merge(staff_api)
        .merge(panelist_api)
        .merge(admin_api)
        .with_state(state)
}
