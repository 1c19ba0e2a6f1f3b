use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ParseError;
use super::utils::FormatTool;

/// 页面中需要抓取的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageField {
    /// 落地页中的 `xtpage = "...-<realID>";`
    RealId,
    /// 播放器代码里的 `iframe src="..."`
    Html5Player,
    /// 播放器页面里的 `urlhtml5 : "..."`
    VideoUrl,
}

impl PageField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RealId => "real id",
            Self::Html5Player => "html5 player",
            Self::VideoUrl => "video url",
        }
    }

    // HTML 属性值需要反转义
    fn is_html(&self) -> bool {
        matches!(self, Self::Html5Player)
    }
}

/// 字段提取策略，正则容易随站点改版失效，单独抽出来方便替换和测试
pub trait FieldExtractor: Send + Sync {
    fn extract_field(&self, text: &str, field: PageField) -> Result<String, ParseError>;
}

lazy_static! {
    static ref REAL_ID: Regex = Regex::new(r#"xtpage = ".*-(.*?)";"#).unwrap();
    static ref HTML5_PLAYER: Regex = Regex::new(r#"iframe src="(.*?)""#).unwrap();
    static ref VIDEO_URL: Regex = Regex::new(r#"urlhtml5 : "(.*?)""#).unwrap();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WatFieldExtractor;

impl WatFieldExtractor {
    fn pattern(field: PageField) -> &'static Regex {
        match field {
            PageField::RealId => &*REAL_ID,
            PageField::Html5Player => &*HTML5_PLAYER,
            PageField::VideoUrl => &*VIDEO_URL,
        }
    }
}

impl FieldExtractor for WatFieldExtractor {
    fn extract_field(&self, text: &str, field: PageField) -> Result<String, ParseError> {
        search_first_match(text, Self::pattern(field), field.label()).map(|value| {
            if field.is_html() {
                FormatTool::clean_html(&value)
            } else {
                value
            }
        })
    }
}

// 返回第一个匹配的第一个分组
pub fn search_first_match(text: &str, pattern: &Regex, label: &str) -> Result<String, ParseError> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::PatternNotFound(label.to_string()))
}
