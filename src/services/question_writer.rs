//! 题目写入服务 - 业务能力层
//!
//! 只负责"写 questions.json"能力

use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 题目写入服务
///
/// 以 2 空格缩进的 JSON 数组写入 UTF-8 文件，已存在的文件会被覆盖。
pub struct QuestionWriter {
    output_path: PathBuf,
}

impl QuestionWriter {
    /// 写入当前目录下的 `questions.json`
    pub fn new() -> Self {
        Self::with_path("questions.json")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入题目列表
    ///
    /// 父目录不存在时会自动创建。
    pub async fn write(&self, questions: &[QuestionRecord]) -> AppResult<()> {
        let path_str = self.output_path.display().to_string();
        let json = serde_json::to_string_pretty(questions)?;

        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::write_failed(&path_str, e))?;
        }

        fs::write(&self.output_path, json)
            .await
            .map_err(|e| AppError::write_failed(&path_str, e))?;

        debug!("已写入 {} 道题目到 {}", questions.len(), path_str);
        Ok(())
    }
}

impl Default for QuestionWriter {
    fn default() -> Self {
        Self::new()
    }
}
