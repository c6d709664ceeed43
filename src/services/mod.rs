pub mod auth_service;
pub mod candidate_service;
pub mod directory_service;
pub mod feedback_service;
pub mod interview_service;
pub mod schedule_service;
