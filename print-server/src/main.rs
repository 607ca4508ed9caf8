use anyhow::Context;
use print_server::{Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenvy::dotenv().ok();
    init_logger();

    tracing::info!("🖨️ RawBT print server starting...");

    // 2. 加载配置
    let config = Config::from_env();
    if config.uses_default_secret() {
        tracing::warn!("SECRET_KEY not set, flash cookies are signed with the default key");
    }

    // 3. 启动 HTTP 服务器
    Server::new(config)
        .run()
        .await
        .context("print server failed")?;

    Ok(())
}
