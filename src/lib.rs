//! # Parse Questions
//!
//! 从考试结果网页中提取题目，输出为结构化的 JSON
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/` - 纯函数：页面正文文本 → `Vec<QuestionRecord>`
//!
//! ### ② 业务能力层（Services）
//! - `PageFetcher` - 下载页面 HTML
//! - `html_text` - 提取 body 纯文本
//! - `QuestionWriter` - 写 questions.json
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionExtractor` - 抓取 → 转文本 → 解析，CLI 与 HTTP 服务共用
//!
//! ### ④ 入口层
//! - `parse_questions` 命令行：结果写入文件
//! - `question_server` HTTP 服务：`GET /api/parseQuestions?url=...`
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod server;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuestionOption, QuestionRecord};
pub use parser::parse;
pub use services::{PageFetcher, QuestionWriter};
pub use workflow::QuestionExtractor;
