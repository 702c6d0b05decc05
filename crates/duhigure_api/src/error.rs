//! API error types and status mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use duhigure_core::{ServiceError, ValidationError};
use log::error;
use serde_json::json;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::Service(ServiceError::Validation(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Service(err @ ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, err.kind())
            }
            ApiError::Service(err @ ServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.kind())
            }
            ApiError::Service(err @ ServiceError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.kind())
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        if status.is_server_error() {
            error!(
                "event=api_error module=api status=error error_type={} error={}",
                error_type, self
            );
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use duhigure_core::{RecordRef, ServiceError, ValidationError};

    #[test]
    fn service_kinds_map_to_distinct_statuses() {
        let validation: ApiError = ValidationError::MissingField("name").into();
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::Service(ServiceError::NotFound(RecordRef::Family(1)));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let internal = ApiError::Internal("lock poisoned".to_string());
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
