pub mod auth_routes;
pub mod candidate_routes;
pub mod dashboard;
pub mod feedback_routes;
pub mod health;
pub mod interview_routes;
pub mod roles;
