use thiserror::Error;

use crate::common::client::error::ApiError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("不支持的URL: {0}")]
    UnsupportedUrl(String),
    #[error("未能在页面中找到 {0}")]
    PatternNotFound(String),
    #[error("响应格式错误: {0}")]
    MalformedResponse(String),
    #[error("网络错误: {0}")]
    NetworkError(String),
}

impl From<ApiError> for ParseError {
    fn from(err: ApiError) -> Self {
        ParseError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for ParseError {
    fn from(err: url::ParseError) -> Self {
        ParseError::MalformedResponse(err.to_string())
    }
}
