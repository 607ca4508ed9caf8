use std::time::Duration;

use axum::{Router, middleware};
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;

/// Requests exceeding this are answered with 408
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the routes (without state)
pub fn build_routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::form::router())
        .merge(crate::api::print::router())
        .merge(crate::api::health::router())
}

/// Build the complete application with state and middleware
pub fn build_app(state: ServerState) -> Router {
    crate::api::health::mark_started();

    build_routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(middleware::from_fn(log_request))
}
