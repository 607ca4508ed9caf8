use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Server-side failures
///
/// Operator mistakes on the form are not errors at this level; they are
/// flashed back to the form (see [`shared::FormError`]).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    #[error("Flash cookie error: {0}")]
    Flash(&'static str),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // 记录内部错误但不暴露详细信息
        tracing::error!(error = ?self, "Internal server error");

        let error_type = match &self {
            ServerError::Io(_) => "io_error",
            ServerError::Template(_) => "template_error",
            ServerError::InvalidHeader(_) => "header_error",
            ServerError::Flash(_) => "flash_error",
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: "An internal error occurred".to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
