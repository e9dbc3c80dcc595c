/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时使用 `info`，开启详细日志时使用 `debug`。
/// 重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `mode`: 运行模式（CLI / HTTP）
/// - `config`: 配置
pub fn log_startup(mode: &str, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {} 模式", mode);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if config.verbose_logging {
        info!("📋 详细日志已开启");
    }
    info!("{}", "=".repeat(60));
}

/// 记录单次请求结果
///
/// # 参数
/// - `method`: 请求方法
/// - `path`: 请求路径
/// - `status`: 响应状态码
pub fn log_request(method: &str, path: &str, status: u16) {
    info!("{} {} -> {}", method, truncate_text(path, 80), status);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("题目解析工具", 2), "题目...");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
