pub mod common;
pub mod parser;

pub use common::client::client::{ClientConfig, Fetcher, WatClient};
pub use parser::VideoParser;
pub use parser::detail_parser::{ParserOptions, WatParser};
pub use parser::errors::ParseError;
pub use parser::models::{ExtractResult, PlaylistRecord, UrlReference, VideoRecord};
