use thiserror::Error;

/// 应用程序错误类型
///
/// 分为两类：
/// - 输入错误（URL 缺失），不会发起请求
/// - 抓取或解析失败（网络、状态码、内容类型、写文件等）
#[derive(Debug, Error)]
pub enum AppError {
    /// URL 参数缺失或为空
    #[error("URL 参数缺失")]
    MissingUrl,

    /// HTTP 客户端初始化失败
    #[error("HTTP 客户端初始化失败: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// 网络请求失败
    #[error("请求 {url} 失败: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 页面返回非 2xx 状态码
    #[error("请求 {url} 返回错误状态码: {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// 页面不是文本/HTML 内容
    #[error("页面 {url} 的内容类型不受支持: {content_type}")]
    UnsupportedContent { url: String, content_type: String },

    /// 写入输出文件失败
    #[error("写入文件失败 ({path}): {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置文件错误
    #[error("配置错误 ({path}): {message}")]
    Config { path: String, message: String },
}

impl AppError {
    /// 创建网络请求失败错误
    pub fn fetch_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch {
            url: url.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Write {
            path: path.into(),
            source,
        }
    }

    /// 创建配置错误
    pub fn config(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        AppError::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// 是否为调用方的输入错误（HTTP 400），其余都是抓取或解析失败（HTTP 500）
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::MissingUrl)
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
