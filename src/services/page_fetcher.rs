//! 页面抓取服务 - 业务能力层
//!
//! 只负责"下载页面 HTML"能力，不做重试，不设超时

use crate::config::Config;
use crate::error::{AppError, AppResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

/// 页面抓取服务
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// 创建新的页面抓取服务
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(AppError::ClientBuild)?;

        Ok(Self { client })
    }

    /// 下载页面 HTML
    ///
    /// # 参数
    /// - `url`: 页面地址
    ///
    /// # 返回
    /// 返回页面文本；网络错误、非 2xx 状态码和非文本内容都视为失败
    pub async fn fetch_html(&self, url: &str) -> AppResult<String> {
        debug!("正在抓取页面: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_textual(content_type) {
                return Err(AppError::UnsupportedContent {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))?;

        debug!("页面下载完成: {} 字节", html.len());
        Ok(html)
    }
}

/// 判断内容类型能否按 HTML 文本处理
fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.is_empty() || mime.starts_with("text/") || mime.contains("html") || mime.contains("xml")
}
