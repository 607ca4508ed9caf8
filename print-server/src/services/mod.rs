//! 服务层
//!
//! - [`web`] - HTTP 路由装配与中间件

pub mod web;

pub use web::{build_app, build_routes};
