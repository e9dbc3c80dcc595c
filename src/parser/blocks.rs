//! 题目块切分
//!
//! 页面文本中每个 `Q.<数字>` 标记开启一个题目块，块内容一直延续到下一个标记
//! （或文本末尾）之前。

use regex::Regex;
use std::sync::LazyLock;

/// 题号标记，只接受 ASCII 数字
static QUESTION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q\.([0-9]+)").unwrap());

/// 一个题目块：题号 + 题号之后的原始文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// `Q.` 之后的数字
    pub number: &'a str,
    /// 题号之后、下一个标记之前的全部文本
    pub body: &'a str,
}

/// 按文档顺序切分题目块
///
/// # 参数
/// - `text`: 页面正文文本
///
/// # 返回
/// 返回互不重叠的题目块列表；没有任何标记时返回空列表
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    // (标记起点, 题号, 块内容起点)
    let mut markers: Vec<(usize, &str, usize)> = Vec::new();

    for caps in QUESTION_MARKER_RE.captures_iter(text) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        markers.push((whole.start(), digits.as_str(), whole.end()));
    }

    markers
        .iter()
        .enumerate()
        .map(|(idx, &(_, number, body_start))| {
            let body_end = markers
                .get(idx + 1)
                .map_or(text.len(), |&(next_start, _, _)| next_start);
            Block {
                number,
                body: &text[body_start..body_end],
            }
        })
        .collect()
}
