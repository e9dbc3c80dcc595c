//! HTTP 服务
//!
//! 每个连接处理一个请求，由独立的 tokio 任务负责；提取流程通过 `Arc` 共享。

pub mod handler;
pub mod http;

use crate::config::Config;
use crate::utils::logging;
use crate::workflow::QuestionExtractor;
use anyhow::{Context, Result};
use handler::{error_response, handle_request, MSG_BAD_REQUEST};
use http::HttpRequest;
use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// 请求头最多读取的行数
const MAX_HEADER_LINES: usize = 100;
/// 单行（请求行或请求头）的最大字节数
const MAX_LINE_BYTES: u64 = 8 * 1024;
/// 接受连接失败后的等待时间
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// 按配置绑定地址并运行服务
pub async fn run(config: &Config) -> Result<()> {
    let extractor = Arc::new(QuestionExtractor::new(config)?);
    let listener = TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("无法监听地址: {}", config.server_addr))?;

    info!("🌐 服务已启动: http://{}{}", listener.local_addr()?, handler::API_PATH);
    serve(listener, extractor).await;
    Ok(())
}

/// 在已绑定的监听器上循环接受连接
pub async fn serve(listener: TcpListener, extractor: Arc<QuestionExtractor>) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let extractor = Arc::clone(&extractor);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, addr, &extractor).await {
                        warn!("连接 {} 处理失败: {}", addr, e);
                    }
                });
            }
            Err(e) => back_off_after_accept_error(&e).await,
        }
    }
}

/// 接受连接失败后稍作等待再重试
///
/// 文件描述符耗尽等错误会立即重复出现。
async fn back_off_after_accept_error(err: &std::io::Error) {
    warn!("接受连接失败: {}", err);
    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
}

/// 读取一行的结果
enum LineRead {
    Line(Vec<u8>),
    TooLong,
    Eof,
}

/// 请求头读取结果
enum RequestHead {
    /// 请求行（已去掉行尾）
    Line(String),
    /// 非 UTF-8 的请求行、超长的行或过多的请求头
    Malformed,
    /// 客户端未发送任何内容就关闭了连接
    Closed,
}

/// 读取一行，最多 [`MAX_LINE_BYTES`] 字节
async fn read_line_limited<R>(reader: &mut R) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = (&mut *reader)
        .take(MAX_LINE_BYTES)
        .read_until(b'\n', &mut buf)
        .await?;

    if n == 0 {
        Ok(LineRead::Eof)
    } else if buf.last() != Some(&b'\n') && n as u64 >= MAX_LINE_BYTES {
        Ok(LineRead::TooLong)
    } else {
        Ok(LineRead::Line(buf))
    }
}

/// 读取请求行并跳过请求头
///
/// 请求头按字节处理，其中的非 UTF-8 字节不影响请求。
async fn read_request_head<R>(reader: &mut R) -> std::io::Result<RequestHead>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = match read_line_limited(reader).await? {
        LineRead::Line(bytes) => bytes,
        LineRead::TooLong => return Ok(RequestHead::Malformed),
        LineRead::Eof => return Ok(RequestHead::Closed),
    };

    let mut header_end = false;
    for _ in 0..MAX_HEADER_LINES {
        match read_line_limited(reader).await? {
            LineRead::Line(header) if header.trim_ascii().is_empty() => {
                header_end = true;
                break;
            }
            LineRead::Line(_) => {}
            LineRead::TooLong => return Ok(RequestHead::Malformed),
            LineRead::Eof => {
                header_end = true;
                break;
            }
        }
    }
    if !header_end {
        return Ok(RequestHead::Malformed);
    }

    match String::from_utf8(request_line) {
        Ok(line) => Ok(RequestHead::Line(line.trim_end().to_string())),
        Err(_) => Ok(RequestHead::Malformed),
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    extractor: &QuestionExtractor,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);

    let request = match read_request_head(&mut reader).await? {
        RequestHead::Line(line) => {
            debug!("来自 {} 的请求: {}", addr, line);
            HttpRequest::parse_request_line(&line)
        }
        RequestHead::Malformed => None,
        RequestHead::Closed => return Ok(()),
    };

    let (method, path, response) = match request {
        Some(request) => {
            let response = handle_request(extractor, &request).await;
            (request.method, request.path, response)
        }
        None => (
            "-".to_string(),
            "-".to_string(),
            error_response(StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
        ),
    };
    logging::log_request(&method, &path, response.status.as_u16());

    let mut stream = reader.into_inner();
    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await
}
