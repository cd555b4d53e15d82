//! OpenAPI description of the HTTP surface.
//!
//! The machine-readable document is served at `/docs/openapi.json` and an
//! interactive Swagger UI page rendering it at `/docs`.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::api_response::ErrorResponse;
use crate::api::healthcheck::HealthcheckResponse;
use crate::api::job_response::JobResponse;
use crate::api::root::RootResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Jobsite API",
        description = "Read-only listing of job postings"
    ),
    paths(
        crate::api::root::handle,
        crate::api::healthcheck::handle,
        crate::api::list_jobs::handle,
        crate::api::get_job::handle
    ),
    components(schemas(JobResponse, ErrorResponse, HealthcheckResponse, RootResponse)),
    tags(
        (name = "jobs", description = "Job listings"),
        (name = "service", description = "Liveness and service info")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the generated document at
/// `/docs/openapi.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi())
}
