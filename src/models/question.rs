use serde::{Deserialize, Serialize};

/// 单个选项，例如 `A. Paris`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 选项字母（A-D）
    pub label: String,
    /// 选项内容（已去除首尾空白）
    pub text: String,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// 从页面中解析出的一道题目
///
/// 未匹配到的字段保持 `None`，序列化时输出为 `null`。
/// 一条记录在一次解析中构建完成，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// `Q.` 之后的题号（原样保留，不保证唯一或连续）
    pub question_number: String,

    #[serde(default)]
    pub options: Vec<QuestionOption>,

    #[serde(default)]
    pub question_type: Option<String>,

    #[serde(rename = "questionID", default)]
    pub question_id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub chosen_option: Option<String>,

    #[serde(default)]
    pub answer_text: Option<String>,
}

impl QuestionRecord {
    /// 创建只有题号的空记录
    pub fn new(question_number: impl Into<String>) -> Self {
        Self {
            question_number: question_number.into(),
            options: Vec::new(),
            question_type: None,
            question_id: None,
            status: None,
            chosen_option: None,
            answer_text: None,
        }
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Q.{} [类型: {}] [ID: {}] [选项: {}]",
            self.question_number,
            self.question_type.as_deref().unwrap_or("未知"),
            self.question_id.as_deref().unwrap_or("未知"),
            self.options.len()
        )
    }
}

/// HTTP 成功响应体：`{"questions": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub questions: Vec<QuestionRecord>,
}

/// HTTP 错误响应体：`{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let record = QuestionRecord::new("7");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "questionNumber": "7",
                "options": [],
                "questionType": null,
                "questionID": null,
                "status": null,
                "chosenOption": null,
                "answerText": null
            })
        );
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let record: QuestionRecord = serde_json::from_value(json!({
            "questionNumber": "3",
            "questionID": "99",
            "options": [{ "label": "B", "text": "London" }]
        }))
        .unwrap();

        assert_eq!(record.question_id.as_deref(), Some("99"));
        assert_eq!(record.options, vec![QuestionOption::new("B", "London")]);
        assert!(record.answer_text.is_none());
    }

    #[test]
    fn test_display_uses_placeholder_for_missing_type() {
        let mut record = QuestionRecord::new("12");
        record.question_id = Some("55".to_string());

        assert_eq!(record.to_string(), "Q.12 [类型: 未知] [ID: 55] [选项: 0]");
    }
}
