//! Form page
//!
//! Renders the BET/OUT form together with any pending flash messages.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Form router
pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(handler::index))
}
