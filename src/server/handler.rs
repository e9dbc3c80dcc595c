//! 请求分发
//!
//! `GET /api/parseQuestions?url=...`（以及 `GET /?url=...`）→ 提取流程 → JSON 响应

use super::http::{HttpRequest, HttpResponse};
use crate::models::{ErrorBody, ExtractResponse};
use crate::workflow::QuestionExtractor;
use reqwest::StatusCode;
use tracing::error;

pub const API_PATH: &str = "/api/parseQuestions";

pub const MSG_URL_REQUIRED: &str = "URL parameter is required";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch or parse the URL";
pub const MSG_NOT_FOUND: &str = "Not found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_BAD_REQUEST: &str = "Bad request";

/// 处理单个请求
pub async fn handle_request(extractor: &QuestionExtractor, request: &HttpRequest) -> HttpResponse {
    if request.path != API_PATH && request.path != "/" {
        return error_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND);
    }
    if request.method != "GET" {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED);
    }

    let Some(url) = request.query_param("url").filter(|u| !u.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, MSG_URL_REQUIRED);
    };

    match extractor.extract(url).await {
        Ok(questions) => HttpResponse::json(StatusCode::OK, &ExtractResponse { questions }),
        Err(e) if e.is_input_error() => error_response(StatusCode::BAD_REQUEST, MSG_URL_REQUIRED),
        Err(e) => {
            error!("❌ 抓取或解析 URL 失败: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_FETCH_FAILED)
        }
    }
}

pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::json(status, &ErrorBody::new(message))
}
