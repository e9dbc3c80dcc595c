//! 测试用的本地页面服务

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const EXAM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Response Sheet</title></head>
<body>
<div>Q.1
Question Type : MCQ
Question ID : 6302841
Options
A. Paris
B. London
C. Berlin
D. Madrid
Status : Answered
Chosen Option : A
</div>
<div>Q.2
Question Type : SA
Question ID : 6302842
Status : Answered
Give n Ans wer : 3.5
</div>
</body>
</html>"#;

/// 启动一个返回固定内容的本地页面服务，返回其地址
pub async fn spawn_fixture(status_line: &'static str, content_type: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                // 读完请求头再响应
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    content_type,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}/exam", addr)
}
