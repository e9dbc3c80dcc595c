//! 题目块解析器
//!
//! 把页面正文文本转换为有序的题目记录列表。
//!
//! ## 解析规则
//!
//! 1. 按 `Q.<数字>` 标记切分题目块（见 [`blocks`]）
//! 2. 在每个块内独立提取 `Question Type` / `Question ID` / `Status` /
//!    `Chosen Option` / `Given Answer` 字段（见 [`fields`]）
//! 3. 解析 `Options` 行之后的 A-D 选项（见 [`options`]）
//!
//! 解析是纯函数：不做 I/O，不会失败，缺失的字段保持为空。

pub mod blocks;
pub mod fields;
pub mod options;
pub mod whitespace;

use crate::models::QuestionRecord;
use blocks::Block;
use fields::{extract_field, Field};

/// 解析页面文本中的全部题目
///
/// # 参数
/// - `page_text`: 页面 body 的纯文本
///
/// # 返回
/// 按文档顺序返回题目记录；没有 `Q.<数字>` 标记时返回空列表
pub fn parse(page_text: &str) -> Vec<QuestionRecord> {
    blocks::split_blocks(page_text)
        .iter()
        .map(parse_block)
        .collect()
}

/// 解析单个题目块
pub fn parse_block(block: &Block<'_>) -> QuestionRecord {
    let body = block.body;

    QuestionRecord {
        question_number: block.number.to_string(),
        options: options::extract_options(body),
        question_type: extract_field(body, Field::QuestionType),
        question_id: extract_field(body, Field::QuestionId),
        status: extract_field(body, Field::Status),
        chosen_option: extract_field(body, Field::ChosenOption),
        answer_text: extract_field(body, Field::GivenAnswer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    const SAMPLE: &str = "Q.1
Question Type: MCQ
Question ID: 55
Options
A. Paris
B. London
Status: Answered
Chosen Option: A
Q.2
Question Type: NAT
Question ID: 56
Give n Ans wer : 3.5";

    #[test]
    fn test_end_to_end_sample() {
        let records = parse(SAMPLE);

        assert_eq!(
            records,
            vec![
                QuestionRecord {
                    question_number: "1".to_string(),
                    options: vec![
                        QuestionOption::new("A", "Paris"),
                        QuestionOption::new("B", "London"),
                    ],
                    question_type: Some("MCQ".to_string()),
                    question_id: Some("55".to_string()),
                    status: Some("Answered".to_string()),
                    chosen_option: Some("A".to_string()),
                    answer_text: None,
                },
                QuestionRecord {
                    question_number: "2".to_string(),
                    options: vec![],
                    question_type: Some("NAT".to_string()),
                    question_id: Some("56".to_string()),
                    status: None,
                    chosen_option: None,
                    answer_text: Some("3.5".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_one_record_per_marker_in_order() {
        let text = "header Q.4 a Q.4 b Q.17 c Q.2 d";
        let numbers: Vec<_> = parse(text)
            .into_iter()
            .map(|r| r.question_number)
            .collect();

        assert_eq!(numbers, vec!["4", "4", "17", "2"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(SAMPLE), parse(SAMPLE));
    }

    #[test]
    fn test_missing_question_type() {
        let text = "Q.9\nQuestion ID: 101\nStatus: Not Answered\nChosen Option: --\n";
        let record = &parse(text)[0];

        assert_eq!(record.question_type, None);
        assert_eq!(record.question_id.as_deref(), Some("101"));
        assert_eq!(record.status.as_deref(), Some("Not Answered"));
        assert_eq!(record.chosen_option.as_deref(), Some("--"));
    }

    #[test]
    fn test_options_then_status() {
        let text = "Q.3\nOptions\nA. foo\nB. bar\nStatus: Done";
        let record = &parse(text)[0];

        assert_eq!(record.options.len(), 2);
        assert_eq!(record.options[0], QuestionOption::new("A", "foo"));
        assert_eq!(record.options[1], QuestionOption::new("B", "bar"));
        assert_eq!(record.status.as_deref(), Some("Done"));
    }

    #[test]
    fn test_tolerant_answer_label() {
        let record = &parse("Q.5 Give n Ans wer : 42")[0];

        assert_eq!(record.answer_text.as_deref(), Some("42"));
    }

    #[test]
    fn test_no_markers_yield_empty() {
        assert!(parse("").is_empty());
        assert!(parse("Question Type: MCQ\nOptions\nA. x").is_empty());
    }

    #[test]
    fn test_label_inside_option_text_is_matched_as_is() {
        // 选项内容里出现的标签同样参与整块匹配
        let text = "Q.6\nOptions\nA. Status: unknown\nB. other\nStatus: Answered";
        let record = &parse(text)[0];

        assert_eq!(record.status.as_deref(), Some("unknown"));
        assert_eq!(record.options[0].text, "Status: unknown");
    }

    #[test]
    fn test_fields_do_not_leak_between_blocks() {
        let text = "Q.1\nStatus: Answered\nQ.2\nQuestion Type: MCQ";
        let records = parse(text);

        assert_eq!(records[0].question_type, None);
        assert_eq!(records[1].status, None);
    }
}
