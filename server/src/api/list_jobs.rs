use std::sync::Arc;

use axum::{debug_handler, extract::State};
use axum_extra::extract::{Query, WithRejection};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::api_response::*;
use crate::api::job_response::JobResponse;
use crate::state::AppState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListJobsQuery {
    /// Case-insensitive substring matched against job titles. Only the first
    /// occurrence is used when repeated.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub search: Vec<String>,
}

impl ListJobsQuery {
    pub fn search(&self) -> Option<&str> {
        self.search.first().map(String::as_str)
    }
}

/// GET /jobs?search={search}
/// List jobs, optionally filtered by title
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "Matching jobs in definition order", body = [JobResponse]),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    )
)]
#[debug_handler]
pub async fn handle(
    WithRejection(Query(params), _): WithRejection<Query<ListJobsQuery>, ApiResponse<ErrorResponse>>,
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<JobResponse>>, ApiResponse<()>> {
    let jobs: Vec<JobResponse> = state
        .directory
        .list(params.search())
        .into_iter()
        .map(JobResponse::from)
        .collect();

    debug!("Search {:?} matched {} jobs", params.search(), jobs.len());

    Ok(ok_response(jobs))
}
