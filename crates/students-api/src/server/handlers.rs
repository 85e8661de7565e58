//! Axum request handlers for all service endpoints.
//!
//! Each student handler is a single pass: decode, validate, call the store on
//! the blocking pool, then hand the result to [`super::response`]. Every
//! failure is terminal for the request.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{CreatedResponse, ErrorResponse, HealthResponse};
use common::{NewStudent, ServiceError, Validate};
use tracing::{error, info, warn};

use super::response;
use super::state::AppState;
use crate::storage::StorageError;

/// `POST /api/v1/students`: create a student.
///
/// Responds `201 {"id": "..."}` on success, `400` for an empty, malformed or
/// incomplete body, and `500` if the insert fails.
pub async fn create_student(State(state): State<AppState>, body: Bytes) -> Response {
    info!("creating a new student");

    let student = match decode_new_student(&body) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "rejected student payload");
            return response::error(&state, &e);
        }
    };

    if let Err(errs) = student.validate() {
        warn!(error = %errs, "invalid student data");
        return response::error(&state, &errs.into());
    }

    let store = state.store.clone();
    let NewStudent { name, email, age } = student;
    match run_blocking(move || store.create_student(&name, &email, age)).await {
        Ok(id) => {
            info!(id, "created a new student");
            response::success(StatusCode::CREATED, CreatedResponse::new(id))
        }
        Err(e) => {
            error!(error = %e, "failed to save student");
            response::error(&state, &e.into())
        }
    }
}

/// `GET /api/v1/students/:id`: fetch one student.
///
/// Responds `400` if `id` is not a base-10 integer. A missing student is a
/// storage failure and follows the configured not-found status.
pub async fn get_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let raw_id = match path {
        Ok(Path(raw_id)) => raw_id,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable student id");
            return response::error(&state, &ServiceError::InvalidId(rejection.body_text()));
        }
    };
    info!(id = %raw_id, "getting student by id");

    let id = match raw_id.parse::<i64>() {
        Ok(id) => id,
        Err(e) => {
            warn!(id = %raw_id, error = %e, "invalid student id");
            return response::error(&state, &ServiceError::InvalidId(format!("{raw_id:?}: {e}")));
        }
    };

    let store = state.store.clone();
    match run_blocking(move || store.get_student_by_id(id)).await {
        Ok(student) => response::success(StatusCode::OK, student),
        Err(e) => {
            error!(id, error = %e, "failed to get student");
            response::error(&state, &e.into())
        }
    }
}

/// `GET /api/v1/students`: list every student.
pub async fn list_students(State(state): State<AppState>) -> Response {
    info!("getting all students");

    let store = state.store.clone();
    match run_blocking(move || store.get_students()).await {
        Ok(students) => response::success(StatusCode::OK, students),
        Err(e) => {
            error!(error = %e, "failed to get students");
            response::error(&state, &e.into())
        }
    }
}

/// `GET /health`: liveness and readiness check.
///
/// Returns `200 OK` when the storage probe succeeds, `503` otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let storage_ready = match run_blocking(move || store.readiness()).await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "storage readiness probe failed");
            false
        }
    };

    let (status_code, status_str) = if storage_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status: status_str.into(),
        storage_ready,
        env: state.env.as_ref().clone(),
    };
    (status_code, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// 405 handler for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    let err = ErrorResponse::new(
        "method_not_allowed",
        "the requested method is not supported for this resource",
    );
    (StatusCode::METHOD_NOT_ALLOWED, Json(err))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode the first JSON value of a create payload, telling an empty body
/// apart from malformed JSON.
///
/// A top-level `null` decodes to an empty [`NewStudent`] so validation reports
/// every field. Anything after the first value is ignored.
fn decode_new_student(body: &[u8]) -> Result<NewStudent, ServiceError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<NewStudent>>()
        .next()
    {
        None => Err(ServiceError::NoData),
        Some(Ok(student)) => Ok(student.unwrap_or_default()),
        Some(Err(e)) => Err(ServiceError::Decode(e.to_string())),
    }
}

/// Run a blocking store call off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Internal(format!("storage task failed: {e}")))?
}
