pub mod models;
pub mod parser_trait;
pub mod wat;

pub use parser_trait::{Parser, ParserOptions};
pub use wat::WatParser;

use tracing::debug;

use crate::{common::client::client::Fetcher, parser::errors::ParseError};

pub fn get_parser<'a>(
    url: &str,
    client: &'a dyn Fetcher,
    options: &ParserOptions,
) -> Result<Box<dyn Parser + 'a>, ParseError> {
    // 根据 URL 选择对应的解析器
    let candidates: Vec<Box<dyn Parser + 'a>> =
        vec![Box::new(WatParser::with_options(client, options.clone()))];

    let parser = candidates
        .into_iter()
        .find(|p| p.suitable(url))
        .ok_or_else(|| ParseError::UnsupportedUrl(url.to_string()))?;
    debug!("获取解析器: {}", parser.name());
    Ok(parser)
}
