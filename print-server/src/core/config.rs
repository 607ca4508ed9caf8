/// 服务器配置 - 打印终端的全部配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | SECRET_KEY | change-me-in-production | Flash cookie 签名密钥 |
///
/// Both are read once in `main` and passed down explicitly.
///
/// # 示例
///
/// ```ignore
/// SECRET_KEY=s3cret PORT=8080 cargo run -p print-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口 (bind 0.0.0.0)
    pub http_port: u16,
    /// Flash cookie HMAC 密钥
    pub secret_key: String,
}

/// Fallback secret, only acceptable for local development
pub const DEFAULT_SECRET_KEY: &str = "change-me-in-production";

/// Fallback HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            secret_key: std::env::var("SECRET_KEY")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SECRET_KEY.into()),
        }
    }

    /// 使用显式值构造配置
    ///
    /// 常用于测试场景
    pub fn new(http_port: u16, secret_key: impl Into<String>) -> Self {
        Self {
            http_port,
            secret_key: secret_key.into(),
        }
    }

    /// Whether the fallback secret is in use
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_PORT, DEFAULT_SECRET_KEY)
    }
}
