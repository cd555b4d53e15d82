pub mod api_response;
pub mod docs;
pub mod get_job;
pub mod healthcheck;
pub mod job_response;
pub mod list_jobs;
pub mod root;
