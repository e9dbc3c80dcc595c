//! HTML 转文本 - 业务能力层
//!
//! 只负责"取出 body 纯文本"能力

use scraper::{Html, Selector};
use std::sync::LazyLock;

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// 提取 HTML 文档 body 内的全部文本
///
/// 按文档顺序拼接所有文本节点，不插入分隔符，保留原有空白和换行。
/// 解析器总会补全缺失的 `<body>`，因此纯文本输入也能得到内容。
pub fn body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&BODY_SELECTOR)
        .flat_map(|body| body.text())
        .collect()
}
