//! Print Server - RawBT 小票打印终端
//!
//! # 架构概述
//!
//! 操作员在表单中选择 BET/OUT 并输入金额，服务器生成小票文本，
//! 编码为 RawBT intent URI 并以 302 重定向交给安卓设备上的 RawBT 应用打印。
//!
//! # 模块结构
//!
//! ```text
//! print-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── printing/      # 小票渲染
//! ├── services/      # 路由装配与中间件
//! └── utils/         # flash cookie、日志、时间
//! ```

pub mod api;
pub mod core;
pub mod printing;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerError, ServerState};
pub use printing::ReceiptRenderer;
pub use services::build_app;

// Re-export logger functions
pub use utils::logger::init_logger;
