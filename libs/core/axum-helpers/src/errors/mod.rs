pub mod handlers;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body returned for domain errors (400) and authentication failures (401).
///
/// ```json
/// { "error": "Name already used on another product." }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Per-field validation failures, when the request body was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Body returned for unclassified failures. Details stay in the logs.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InternalErrorResponse {
    pub status: String,
    pub message: String,
}

impl Default for InternalErrorResponse {
    fn default() -> Self {
        Self {
            status: "error".to_string(),
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain kinds (bad request, not found, conflict, validation) all map to
/// 400, authentication failures to 401 and everything else to 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("JSON extraction error: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::NotFound(_)
            | AppError::Conflict(_)
            | AppError::Validation(_)
            | AppError::JsonRejection(_)
            | AppError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::InternalServerError(detail) => {
                tracing::error!(%detail, "Unhandled error");
                return (status, Json(InternalErrorResponse::default())).into_response();
            }
            AppError::Validation(errors) => {
                tracing::info!(?errors, "Validation error");
                ErrorResponse {
                    error: "Input data not provided or invalid".to_string(),
                    details: serde_json::to_value(&errors).ok(),
                }
            }
            AppError::JsonRejection(rejection) => {
                tracing::info!(%rejection, "Rejected request body");
                ErrorResponse::new(rejection.body_text())
            }
            AppError::QueryRejection(rejection) => {
                tracing::info!(%rejection, "Rejected query string");
                ErrorResponse::new(rejection.body_text())
            }
            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                ErrorResponse::new(msg)
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                tracing::info!("Request failed: {}", msg);
                ErrorResponse::new(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_domain_errors_are_bad_request() {
        for err in [
            AppError::BadRequest("bad".into()),
            AppError::NotFound("missing".into()),
            AppError::Conflict("taken".into()),
        ] {
            let expected = err.to_string();
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await, serde_json::json!({ "error": expected }));
        }
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let response = AppError::Unauthorized("Invalid credentials".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response =
            AppError::InternalServerError("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": "error", "message": "Internal Server Error" })
        );
    }
}
