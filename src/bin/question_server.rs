use anyhow::Result;
use clap::Parser;
use parse_questions::utils::logging;
use parse_questions::{server, Config};
use std::path::PathBuf;

/// 题目提取 HTTP 服务
#[derive(Parser, Debug)]
#[command(name = "question_server", version, long_about = None)]
struct Args {
    /// 监听地址（默认 127.0.0.1:3000）
    #[arg(short, long)]
    addr: Option<String>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup("HTTP", &config);

    server::run(&config).await
}
