//! 选项区解析
//!
//! 选项区从内容恰好为 `Options` 的一行之后开始，到下一个字段标签为止。

use super::whitespace::{self, SPACE_CLASS};
use crate::models::QuestionOption;
use regex::Regex;
use std::sync::LazyLock;

/// 选项区的结束标记：任一字段标签开头的行
static SECTION_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Question Type|Question ID|Status|Chosen Option|Give)").unwrap()
});

/// 选项行：大写字母 A-D，可选的句点，可选空白，然后是选项内容
static OPTION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([A-D])\.?{ws}*([^\r\x{{2028}}\x{{2029}}]*)",
        ws = SPACE_CLASS
    ))
    .unwrap()
});

const SECTION_MARKER: &str = "options";

/// 提取题目块中的选项列表
///
/// 选项区之前的行全部忽略；选项区内不符合选项格式的行直接跳过。
pub fn extract_options(block: &str) -> Vec<QuestionOption> {
    let mut options = Vec::new();
    let mut in_section = false;

    for line in block.split('\n').map(whitespace::trim).filter(|l| !l.is_empty()) {
        if line.to_lowercase() == SECTION_MARKER {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if SECTION_END_RE.is_match(line) {
            break;
        }
        if let Some(option) = parse_option_line(line) {
            options.push(option);
        }
    }

    options
}

fn parse_option_line(line: &str) -> Option<QuestionOption> {
    let caps = OPTION_LINE_RE.captures(line)?;
    let label = caps.get(1)?.as_str();
    let text = whitespace::trim(caps.get(2).map_or("", |m| m.as_str()));
    Some(QuestionOption::new(label, text))
}
