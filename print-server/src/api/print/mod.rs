//! Print endpoint

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Print router
pub fn router() -> Router<ServerState> {
    Router::new().route("/print", post(handler::print))
}
