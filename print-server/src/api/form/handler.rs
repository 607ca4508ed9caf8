//! Form page handler

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{Html, IntoResponse, Response},
};
use shared::TransactionMode;
use tera::Context;

use crate::core::{Result, ServerState};
use crate::utils::flash;

/// GET / - render the form, consuming flash messages
pub async fn index(State(state): State<ServerState>, headers: HeaderMap) -> Result<Response> {
    let messages = state.flash.read(&headers);

    let mut ctx = Context::new();
    ctx.insert("messages", &messages);
    ctx.insert("modes", &TransactionMode::ALL);

    let html = state.templates.render("index.html", &ctx)?;
    let mut response = Html(html).into_response();

    // Shown once
    if !messages.is_empty() {
        response.headers_mut().insert(
            header::SET_COOKIE,
            HeaderValue::from_str(&flash::clear_cookie())?,
        );
    }

    Ok(response)
}
