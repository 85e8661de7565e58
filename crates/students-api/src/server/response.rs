//! Success and error envelope builders.
//!
//! Every response leaving a handler goes through one of these two functions so
//! that all bodies are JSON with a predictable shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::ServiceError;
use serde::Serialize;

use super::state::AppState;

/// Serialise `body` directly with the given 2xx `status`.
pub fn success<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Render `err` as the JSON error envelope.
///
/// The status comes from [`ServiceError::http_status`], except that
/// [`ServiceError::NotFound`] follows the state's configured policy.
pub fn error(state: &AppState, err: &ServiceError) -> Response {
    let status = match err {
        ServiceError::NotFound(_) => state.not_found_status,
        other => StatusCode::from_u16(other.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    };
    (status, Json(err.to_response())).into_response()
}
