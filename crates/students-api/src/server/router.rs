//! Axum router construction.

use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            "/api/v1/students",
            get(handlers::list_students)
                .post(handlers::create_student)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/v1/students/:id",
            get(handlers::get_student).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::new(middleware::REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| middleware::request_span(req)),
        )
        .layer(SetRequestIdLayer::new(
            middleware::REQUEST_ID_HEADER,
            middleware::MakeRequestUuid,
        ))
        .with_state(state)
}
