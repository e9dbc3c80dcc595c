//! 题目块内的字段提取
//!
//! 每个字段在整个块内做一次不区分大小写的匹配，取第一个匹配。
//! 标签与冒号之间、冒号之后允许任意空白（包括换行），取值为该行剩余部分。

use super::whitespace::{self, LINE_REST, SPACE_CLASS};
use regex::Regex;
use std::sync::LazyLock;

/// `<标签> : <该行剩余部分>`
fn field_regex(label: &str) -> Regex {
    Regex::new(&format!(
        "(?i){label}{ws}*:{ws}*({rest})",
        ws = SPACE_CLASS,
        rest = LINE_REST
    ))
    .unwrap()
}

static QUESTION_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("Question Type"));
static QUESTION_ID_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("Question ID"));
static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("Status"));
static CHOSEN_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("Chosen Option"));
// 页面转文本时会在单词内插入空格，例如 "Give n Ans wer"
static GIVEN_ANSWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    field_regex(&format!("Give{ws}*n{ws}*Ans{ws}*wer", ws = SPACE_CLASS))
});

/// 题目块中可识别的字段标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    QuestionType,
    QuestionId,
    Status,
    ChosenOption,
    GivenAnswer,
}

impl Field {
    fn regex(self) -> &'static Regex {
        match self {
            Field::QuestionType => &*QUESTION_TYPE_RE,
            Field::QuestionId => &*QUESTION_ID_RE,
            Field::Status => &*STATUS_RE,
            Field::ChosenOption => &*CHOSEN_OPTION_RE,
            Field::GivenAnswer => &*GIVEN_ANSWER_RE,
        }
    }
}

/// 在题目块中提取字段值
///
/// # 返回
/// 标签不存在时返回 `None`；标签存在但没有内容时返回空字符串
pub fn extract_field(block: &str, field: Field) -> Option<String> {
    field
        .regex()
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|value| whitespace::trim(value.as_str()).to_string())
}
