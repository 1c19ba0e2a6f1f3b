use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ParseError;

lazy_static! {
    // 形如 http://www.wat.tv/video/<标题>-<shortID>_<其他>.html
    static ref VALID_URL: Regex =
        Regex::new(r"^http://www\.wat\.tv/.*-(?P<short_id>.*?)_.*?\.html").unwrap();
}

pub fn is_suitable(url: &str) -> bool {
    VALID_URL.is_match(url.trim())
}

// 从页面URL中提取 shortID
pub fn extract_short_id(url: &str) -> Result<String, ParseError> {
    VALID_URL
        .captures(url.trim())
        .and_then(|caps| caps.name("short_id"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::UnsupportedUrl(url.to_string()))
}
