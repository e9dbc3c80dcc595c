//! 题目提取流程
//!
//! 定义"一个 URL"的完整处理流程：抓取 → 转文本 → 解析。
//! CLI 和 HTTP 服务共用这一流程，只负责各自的输入和输出。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use crate::parser;
use crate::services::{html_text, PageFetcher, QuestionWriter};
use crate::utils::logging::truncate_text;
use tracing::{debug, info};

/// 题目提取流程
///
/// 不持有可变状态，可以在多个请求之间共享。
pub struct QuestionExtractor {
    fetcher: PageFetcher,
}

impl QuestionExtractor {
    /// 创建新的提取流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// 抓取 URL 并解析其中的题目
    ///
    /// # 参数
    /// - `url`: 题目页面地址
    ///
    /// # 返回
    /// 返回按页面顺序排列的题目列表；URL 为空时返回 [`AppError::MissingUrl`]，
    /// 不会发起请求
    pub async fn extract(&self, url: &str) -> AppResult<Vec<QuestionRecord>> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::MissingUrl);
        }

        info!("🔍 正在抓取: {}", truncate_text(url, 120));
        let html = self.fetcher.fetch_html(url).await?;

        let questions = Self::extract_from_html(&html);
        info!("✓ 解析完成，共 {} 道题目", questions.len());

        Ok(questions)
    }

    /// 解析已下载的 HTML
    pub fn extract_from_html(html: &str) -> Vec<QuestionRecord> {
        let text = html_text::body_text(html);
        debug!("页面正文长度: {} 字符", text.chars().count());

        let questions = parser::parse(&text);
        for question in &questions {
            debug!("  {}", question);
        }
        questions
    }

    /// 抓取、解析并写入文件
    ///
    /// # 返回
    /// 返回写入的题目数量
    pub async fn extract_to_file(&self, url: &str, writer: &QuestionWriter) -> AppResult<usize> {
        let questions = self.extract(url).await?;
        writer.write(&questions).await?;
        Ok(questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_html() {
        let html = r#"<html><body>
<div class="question">Q.1
<table>
<tr><td>Question Type :</td><td>MCQ</td></tr>
<tr><td>Question ID :</td><td>7001</td></tr>
</table>
<p>Options</p>
<p>A. 12</p>
<p>B. 24</p>
<p>Status :Answered</p>
</div>
</body></html>"#;

        let questions = QuestionExtractor::extract_from_html(html);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_number, "1");
        assert_eq!(questions[0].question_type.as_deref(), Some("MCQ"));
        assert_eq!(questions[0].question_id.as_deref(), Some("7001"));
        assert_eq!(questions[0].status.as_deref(), Some("Answered"));
        assert_eq!(
            questions[0].options,
            vec![
                crate::models::QuestionOption::new("A", "12"),
                crate::models::QuestionOption::new("B", "24"),
            ]
        );
    }

    #[test]
    fn test_blank_url_is_rejected_without_fetch() {
        let extractor = QuestionExtractor::new(&Config::default()).unwrap();

        for url in ["", "   "] {
            let err = tokio_test::block_on(extractor.extract(url)).unwrap_err();
            assert!(err.is_input_error());
        }
    }
}
