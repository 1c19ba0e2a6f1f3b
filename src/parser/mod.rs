use detail_parser::{ParserOptions, get_parser};
use errors::ParseError;
use models::ExtractResult;
use tracing::info;

use crate::common::client::client::Fetcher;

pub mod detail_parser;
pub mod detector;
pub mod errors;
pub mod models;
pub mod patterns;
pub mod utils;

pub struct VideoParser<'a> {
    client: &'a dyn Fetcher,
    options: ParserOptions,
}

impl<'a> VideoParser<'a> {
    pub fn new(client: &'a dyn Fetcher, options: ParserOptions) -> Self {
        Self { client, options }
    }

    // 解析入口
    pub async fn parse(&self, url: &str) -> Result<ExtractResult, ParseError> {
        let parser = get_parser(url, self.client, &self.options)?;
        info!("使用解析器: {}", parser.name());

        parser.parse(url).await
    }
}
