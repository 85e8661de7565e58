//! Common error types shared across crates.

use thiserror::Error;

use crate::protocol::ErrorResponse;
use crate::validation::ValidationErrors;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::NoData`], [`ServiceError::Decode`],
///   [`ServiceError::Validation`], [`ServiceError::InvalidId`] → 400
/// - [`ServiceError::NotFound`] → 500 (the service may opt into 404)
/// - [`ServiceError::Storage`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body was empty.
    #[error("no data provided")]
    NoData,

    /// The request body was not valid JSON for the expected shape.
    #[error("failed to decode request body: {0}")]
    Decode(String),

    /// One or more field rules failed.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A path parameter was not a base-10 integer.
    #[error("invalid student id: {0}")]
    InvalidId(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other failure reported by the storage layer.
    #[error("{0}")]
    Storage(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::NoData => 400,
            ServiceError::Decode(_) => 400,
            ServiceError::Validation(_) => 400,
            ServiceError::InvalidId(_) => 400,
            ServiceError::NotFound(_) => 500,
            ServiceError::Storage(_) => 500,
        }
    }

    /// Machine-readable code placed in [`ErrorResponse::code`].
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NoData => "no_data",
            ServiceError::Decode(_) => "decode_error",
            ServiceError::Validation(_) => "validation_error",
            ServiceError::InvalidId(_) => "invalid_id",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Storage(_) => "storage_error",
        }
    }

    /// Render the error as the JSON error envelope.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ServiceError::Validation(errs) => ErrorResponse::validation(self.code(), errs),
            other => ErrorResponse::new(other.code(), other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errs: ValidationErrors) -> Self {
        ServiceError::Validation(errs)
    }
}
