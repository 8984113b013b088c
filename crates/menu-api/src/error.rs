//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_core::{DomainError, ValidationReport};
use menu_security::jwt::JwtError;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Too many requests: {0}")]
    TooManyRequests(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::Validation(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidParameter(msg) => {
                tracing::warn!("Invalid parameter: {}", msg);
                ApiResponse::<()>::error("INVALID_PARAMETER", &msg)
            }
            ApiError::Validation(report) => {
                tracing::warn!("Validation failed: {}", report);
                ApiResponse::<()>::error("VALIDATION_ERROR", "Invalid input")
                    .with_fields(report.errors().to_vec())
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ApiResponse::<()>::error("BAD_REQUEST", &msg)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                ApiResponse::<()>::error("UNAUTHORIZED", &msg)
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                ApiResponse::<()>::error("FORBIDDEN", &msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                ApiResponse::<()>::error("NOT_FOUND", &msg)
            }
            ApiError::TooManyRequests(msg) => {
                tracing::warn!("Throttled: {}", msg);
                ApiResponse::<()>::error("THROTTLED", &msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                ApiResponse::<()>::error("DATABASE_ERROR", "A database error occurred")
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiResponse::<()>::error("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidParameter { name, reason } => {
                ApiError::InvalidParameter(format!("{name}: {reason}"))
            }
            DomainError::Validation(report) => ApiError::Validation(report),
            DomainError::MenuItemNotFound(_) | DomainError::CategoryNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            DomainError::CategorySlugAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status() {
        let err: ApiError = DomainError::invalid_parameter("perpage", "must be a positive integer").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = DomainError::MenuItemNotFound(4).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = DomainError::DatabaseError("pool timed out".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_jwt_error_is_unauthorized() {
        let err: ApiError = JwtError::TokenExpired.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
