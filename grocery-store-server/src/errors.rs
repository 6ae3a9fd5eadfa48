use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use grocery_store_api::domain::validation::ValidationErrors;
use grocery_store_api::error::ServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message for every failure whose detail must stay on the server.
pub const GENERIC_FAILURE_MESSAGE: &str = "The request could not be processed";

// =============================================================================
// Response Body
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationResponse {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<ViolationResponse>>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            violations: None,
        }
    }
}

// =============================================================================
// ApiError
// =============================================================================

/// Transport-level failure of a request.
///
/// This is the only place where service outcomes become status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Carries the id exactly as the client sent it.
    #[error("Invalid customer id '{0}'")]
    InvalidId(String),

    #[error("Customer '{0}' not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage faults, unreadable bodies and anything unexpected.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    BadRequest,
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound(_) => "CUSTOMER_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::BadRequest => "BAD_REQUEST",
        }
    }

    /// Delete answers an unusable id with 404 instead of 400.
    #[must_use]
    pub fn for_delete(self) -> Self {
        match self {
            Self::InvalidId(raw) => Self::NotFound(raw),
            other => other,
        }
    }

    /// Converts the outcome of an operation addressed by `raw_id`, so an
    /// id rejected by the service is reported the way the client wrote it.
    #[must_use]
    pub fn from_service(error: ServiceError, raw_id: &str) -> Self {
        match error {
            ServiceError::InvalidArgument(_) => Self::InvalidId(raw_id.to_string()),
            other => Self::from(other),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::InvalidArgument(message) => {
                tracing::debug!(%message, "invalid argument answered as bad request");
                Self::BadRequest
            }
            ServiceError::ValidationFailed(errors) => Self::Validation(errors),
            ServiceError::NotFound(id) => Self::NotFound(id.to_string()),
            ServiceError::Conflict(message) => Self::Conflict(message),
            ServiceError::StorageFailure(message) => {
                tracing::warn!(%message, "storage failure answered as bad request");
                Self::BadRequest
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "request body rejected");
        Self::BadRequest
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let mut body = ErrorResponse::new(self.error_code(), self.to_string());

        if let Self::Validation(errors) = &self {
            body.violations = Some(
                errors
                    .violations()
                    .iter()
                    .map(|violation| ViolationResponse {
                        field: violation.field.as_str().to_string(),
                        message: violation.reason.to_string(),
                    })
                    .collect(),
            );
        }

        (status_code, Json(body)).into_response()
    }
}
