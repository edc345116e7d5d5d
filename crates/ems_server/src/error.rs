//! Error types for the HTTP layer.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ems_core::{RepoError, ServiceError, ValidationError};
use log::error;
use thiserror::Error;

/// Request failure surfaced to the client as an error-status response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input.
    #[error("{0}")]
    Validation(String),
    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Store or runtime failure; details are logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(details) => {
                error!("event=http_error module=server status=error category=internal error={details}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": message,
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(err) => Self::Validation(err.to_string()),
            err @ ServiceError::DepartmentNotFound(_) => Self::NotFound(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        ServiceError::from(value).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

/// Failure that prevents the server from starting or keeps it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open store: {0}")]
    Db(#[from] ems_core::db::DbError),
    #[error("network error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use ems_core::{ServiceError, ValidationError};

    #[test]
    fn service_errors_map_to_status_codes() {
        let validation: ApiError =
            ServiceError::Validation(ValidationError::MissingField("name")).into();
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = ServiceError::DepartmentNotFound(3).into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let broken: ApiError = ServiceError::InconsistentState("read-back").into();
        assert_eq!(
            broken.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
