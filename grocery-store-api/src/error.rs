use thiserror::Error;
use uuid::Uuid;

use crate::domain::validation::ValidationErrors;

/// Typed failure outcomes of the customer service.
///
/// Storage faults are flattened into [`ServiceError::StorageFailure`] with a
/// generic description; driver-specific detail is logged, never carried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(Uuid),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    /// Reserved for conditional writes; nothing raises it yet.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn nil_id() -> Self {
        ServiceError::InvalidArgument("customer id must not be the nil UUID".to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
