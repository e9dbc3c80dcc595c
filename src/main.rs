use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use parse_questions::utils::logging;
use parse_questions::{Config, QuestionExtractor, QuestionWriter};
use std::path::PathBuf;
use tracing::{error, info};

/// 从题目页面提取题目并写入 JSON 文件
#[derive(Parser, Debug)]
#[command(name = "parse_questions", version, long_about = None)]
struct Args {
    /// 题目页面 URL
    url: String,

    /// 输出文件（默认 questions.json）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.url.trim().is_empty() {
        Args::command()
            .error(ErrorKind::MissingRequiredArgument, "URL 不能为空")
            .exit();
    }

    // 加载配置
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup("CLI", &config);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));
    let writer = QuestionWriter::with_path(output);
    let extractor = QuestionExtractor::new(&config)?;

    // 抓取失败只记录日志，不影响退出码
    match extractor.extract_to_file(&args.url, &writer).await {
        Ok(count) => {
            info!("✅ 已提取 {} 道题目", count);
            println!("Questions JSON created successfully: {}", writer.path().display());
        }
        Err(e) => error!("❌ 抓取或处理 URL 失败: {}", e),
    }

    Ok(())
}
