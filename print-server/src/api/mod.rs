//! HTTP 路由模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 打印表单 |
//! | /print | POST | 生成小票并重定向到 RawBT intent |
//! | /health | GET | 健康检查 |

pub mod form;
pub mod health;
pub mod print;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::core::{Result, ServerState};

/// `302 Found` to `location`
pub(crate) fn found(location: &str) -> Result<Response> {
    let location = HeaderValue::from_str(location)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `302 Found` to the form with `message` flashed
pub(crate) fn flash_redirect(state: &ServerState, message: String) -> Result<Response> {
    let cookie = state
        .flash
        .set_cookie(&[message])
        .map_err(crate::core::ServerError::Flash)?;
    let cookie = HeaderValue::from_str(&cookie)?;

    let mut response = found("/")?;
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}
