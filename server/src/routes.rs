use crate::api::api_response::{not_found, ApiResponse};
use crate::api::{docs, get_job, healthcheck, list_jobs, root};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root::handle))
        .route("/health", get(healthcheck::handle))
        .route("/jobs", get(list_jobs::handle))
        .route("/jobs/:job_id", get(get_job::handle))
        .merge(docs::swagger_ui())
}

pub async fn fallback() -> ApiResponse<()> {
    not_found("Route not found")
}
