use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use tracing::debug;

use crate::api::api_response::*;
use crate::api::job_response::JobResponse;
use crate::state::AppState;

/// GET /jobs/{job_id}
/// Get a single job by its id
#[utoipa::path(
    get,
    path = "/jobs/{job_id}",
    tag = "jobs",
    params(("job_id" = u64, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "The requested job", body = JobResponse),
        (status = 400, description = "Job id is not a non-negative integer", body = ErrorResponse),
        (status = 404, description = "No job with this id", body = ErrorResponse,
            example = json!({"error": "Job not found"}))
    )
)]
#[debug_handler]
pub async fn handle(
    WithRejection(Path(job_id), _): WithRejection<Path<String>, ApiResponse<ErrorResponse>>,
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<JobResponse>, ApiResponse<()>> {
    let job_id = parse_job_id(&job_id)?;

    debug!("Getting job {}", job_id);

    let job = state.directory.get(job_id).inspect_err(|e| debug!("{}", e))?;

    Ok(ok_response(JobResponse::from(job)))
}

/// Digits only; a number too large for any stored id is simply not found
fn parse_job_id(raw: &str) -> Result<u64, ApiResponse<()>> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_request(format!(
            "Invalid job_id {:?}; must be a non-negative integer",
            raw
        )));
    }

    raw.parse::<u64>().map_err(|_| {
        debug!("Job id {} is out of range", raw);
        not_found(JOB_NOT_FOUND)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert!(matches!(parse_job_id("42"), Ok(42)));
        assert!(matches!(parse_job_id("007"), Ok(7)));
        assert!(matches!(parse_job_id("4294967296"), Ok(4294967296)));
    }

    #[test]
    fn overflowing_digits_are_not_found() {
        assert!(matches!(
            parse_job_id("99999999999999999999"),
            Err(ApiResponse::NotFound(_))
        ));
    }

    #[test]
    fn non_digits_are_bad_requests() {
        for raw in ["abc", "-1", "1.5", "+3", ""] {
            assert!(matches!(parse_job_id(raw), Err(ApiResponse::BadRequest(_))));
        }
    }
}
