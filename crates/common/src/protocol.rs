//! Response bodies returned by the public HTTP API.
//!
//! Successful reads serialise [`crate::Student`] values directly; everything
//! else goes through the types below.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

// ---------------------------------------------------------------------------
// Create endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /api/v1/students`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Message carrying the identifier assigned by storage.
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            id: format!("Successfully created a new student: {id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Status marker carried by every error envelope.
pub const STATUS_ERROR: &str = "Error";

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always [`STATUS_ERROR`].
    pub status: String,
    /// Short machine-readable error code (e.g. `"validation_error"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub error: String,
    /// Per-field detail, present only for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.into(),
            code: code.into(),
            error: error.into(),
            errors: Vec::new(),
        }
    }

    /// Construct an [`ErrorResponse`] listing every field violation.
    pub fn validation(code: impl Into<String>, errs: &ValidationErrors) -> Self {
        Self {
            errors: errs
                .violations()
                .iter()
                .map(|v| FieldError {
                    field: v.field.into(),
                    rule: v.rule.tag().into(),
                    message: v.message(),
                })
                .collect(),
            ..Self::new(code, errs.to_string())
        }
    }
}

/// One entry of [`ErrorResponse::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub rule: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the storage backend answered its readiness probe.
    pub storage_ready: bool,
    /// Deployment environment label from configuration.
    pub env: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;
    use serde_json::json;

    #[test]
    fn created_response_embeds_id() {
        let r = CreatedResponse::new(7);
        assert_eq!(r.id, "Successfully created a new student: 7");
    }

    #[test]
    fn error_response_omits_empty_field_list() {
        let e = ErrorResponse::new("storage_error", "disk I/O error");
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(
            v,
            json!({"status": "Error", "code": "storage_error", "error": "disk I/O error"})
        );
    }

    #[test]
    fn validation_response_lists_fields() {
        let errs = Validator::new()
            .required("email", &String::new())
            .finish()
            .unwrap_err();
        let e = ErrorResponse::validation("validation_error", &errs);
        assert_eq!(e.error, "field email is a required field");
        assert_eq!(
            e.errors,
            vec![FieldError {
                field: "email".into(),
                rule: "required".into(),
                message: "field email is a required field".into(),
            }]
        );
    }
}
