use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP 状态异常 {0}: {1}")]
    HttpStatus(u16, String),

    #[error("服务暂时不可用，请稍后重试")]
    RetryLater,

    #[error("响应解析失败: {0}")]
    InvalidResponse(String),
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
