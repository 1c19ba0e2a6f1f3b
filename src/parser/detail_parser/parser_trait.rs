use async_trait::async_trait;

use crate::parser::{errors::ParseError, models::ExtractResult};

// 解析选项
#[derive(Debug, Clone)]
pub struct ParserOptions {
    // 多分段视频同时请求的分段数，1 表示严格顺序
    pub chapter_concurrency: usize,
    // 同一次解析中已经拿到的 contentv3 文档不再重复请求
    pub reuse_content_info: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            chapter_concurrency: 1,
            reuse_content_info: true,
        }
    }
}

// 定义一个trait，用于解析页面URL，返回单个视频或者播放列表
#[async_trait]
pub trait Parser: Send + Sync {
    fn name(&self) -> &'static str;

    fn suitable(&self, url: &str) -> bool;

    async fn parse(&self, url: &str) -> Result<ExtractResult, ParseError>;
}
