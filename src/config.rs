use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务监听地址
    pub server_addr: String,
    /// CLI 输出文件
    pub output_file: String,
    /// 抓取页面时使用的 User-Agent
    pub user_agent: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            output_file: "questions.json".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，再用环境变量覆盖
    ///
    /// 文件中缺失的键使用默认值。
    pub fn load(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::config(&display, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| AppError::config(&display, e))?;
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            server_addr: std::env::var("SERVER_ADDR").unwrap_or(self.server_addr),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(self.output_file),
            user_agent: std::env::var("USER_AGENT").unwrap_or(self.user_agent),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }
}
