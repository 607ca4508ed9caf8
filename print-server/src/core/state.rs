use std::sync::Arc;

use tera::Tera;

use crate::core::{Config, Result};
use crate::printing::{BUSINESS_TIMEZONE, ReceiptRenderer};
use crate::utils::flash::FlashSigner;

/// Form page template
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段不可变，使用 Arc 实现浅拷贝，每个请求独立处理。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 |
/// | templates | Arc<Tera> | HTML 模板 |
/// | flash | Arc<FlashSigner> | Flash cookie 签名 |
/// | renderer | Arc<ReceiptRenderer> | 小票渲染 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub templates: Arc<Tera>,
    pub flash: Arc<FlashSigner>,
    pub renderer: Arc<ReceiptRenderer>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// Fails only if the bundled template does not compile.
    pub fn initialize(config: &Config) -> Result<Self> {
        let mut templates = Tera::default();
        templates.add_raw_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self {
            config: config.clone(),
            templates: Arc::new(templates),
            flash: Arc::new(FlashSigner::new(&config.secret_key)),
            renderer: Arc::new(ReceiptRenderer::new(BUSINESS_TIMEZONE)),
        })
    }
}
