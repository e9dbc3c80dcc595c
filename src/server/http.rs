//! 最小 HTTP/1.1 请求与响应
//!
//! 只解析请求行（方法、路径、查询参数），请求头和请求体不参与处理。

use reqwest::{StatusCode, Url};
use serde::Serialize;

/// 已解析的请求行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    /// 已解码的查询参数，保持原始顺序
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// 解析请求行，例如 `GET /api/parseQuestions?url=... HTTP/1.1`
    ///
    /// # 返回
    /// 格式不正确时返回 `None`
    pub fn parse_request_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let method = parts.next()?;
        let target = parts.next()?;
        let version = parts.next()?;
        if !version.starts_with("HTTP/") || parts.next().is_some() {
            return None;
        }

        let url = Url::parse("http://localhost/").ok()?.join(target).ok()?;

        Some(Self {
            method: method.to_ascii_uppercase(),
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    /// 取第一个同名查询参数
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// JSON 响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    /// 构建 JSON 响应
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        let body = serde_json::to_string(body)
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e));
        Self { status, body }
    }

    /// 序列化为完整的响应报文
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or(""),
            self.body.len()
        );

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}
