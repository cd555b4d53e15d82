use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::QueryRejection;
use directory::DirectoryError;
use serde::Serialize;
use utoipa::ToSchema;

pub const JOB_NOT_FOUND: &str = "Job not found";

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"error": "Job not found"}))]
pub struct ErrorResponse {
    error: String,
}

pub enum ApiResponse<T> {
    BadRequest(Json<ErrorResponse>),
    NotFound(Json<ErrorResponse>),
    OkResponse(Json<T>),
}

impl From<QueryRejection> for ApiResponse<ErrorResponse> {
    fn from(rejection: QueryRejection) -> ApiResponse<ErrorResponse> {
        ApiResponse::BadRequest(Json(ErrorResponse {
            error: format!("Failed to deserialize query string: {}", rejection),
        }))
    }
}

impl From<PathRejection> for ApiResponse<ErrorResponse> {
    fn from(rejection: PathRejection) -> ApiResponse<ErrorResponse> {
        ApiResponse::BadRequest(Json(ErrorResponse {
            error: rejection.body_text(),
        }))
    }
}

impl From<DirectoryError> for ApiResponse<()> {
    fn from(err: DirectoryError) -> ApiResponse<()> {
        match err {
            DirectoryError::NotFound(_) => not_found(JOB_NOT_FOUND),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self {
            ApiResponse::BadRequest(json) => (StatusCode::BAD_REQUEST, json).into_response(),
            ApiResponse::NotFound(json) => (StatusCode::NOT_FOUND, json).into_response(),
            ApiResponse::OkResponse(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

pub fn bad_request<T: Into<String>>(msg: T) -> ApiResponse<()> {
    ApiResponse::BadRequest(Json(ErrorResponse { error: msg.into() }))
}

pub fn not_found<T: Into<String>>(msg: T) -> ApiResponse<()> {
    ApiResponse::NotFound(Json(ErrorResponse { error: msg.into() }))
}

pub fn ok_response<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse::OkResponse(Json(data))
}
