pub mod admin;
pub mod alerts;
pub mod auth;
pub mod connections;
pub mod courses;
pub mod job_faq;
pub mod jobs;
pub mod messages;
pub mod qa_sessions;
pub mod referrals;
pub mod request_common;
pub mod resume;
pub mod upload;
pub mod users;
