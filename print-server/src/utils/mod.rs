//! 工具模块 - 通用工具函数
//!
//! - [`flash`] - 签名 flash cookie
//! - [`logger`] - 日志初始化
//! - [`time`] - 业务时区时间格式化

pub mod flash;
pub mod logger;
pub mod time;
