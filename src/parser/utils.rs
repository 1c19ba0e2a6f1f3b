use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

// 站点常见的日期格式，按顺序尝试
const DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S",
];

lazy_static! {
    // 末尾的时区偏移，如 " +0200"、" -05:00"，前面必须有空格以免误删 ISO 日期的 "-21"
    static ref TZ_OFFSET: Regex = Regex::new(r"\s[+-][0-9:]*$").unwrap();
}

pub struct FormatTool;

impl FormatTool {
    // 把各种格式的日期统一成 NaiveDate，无法识别时返回 None
    pub fn unified_strdate(raw: &str) -> Option<NaiveDate> {
        let normalized = raw.replace(',', " ");
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        let normalized = TZ_OFFSET.replace(&normalized, "");
        if normalized.is_empty() {
            return None;
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
            .or_else(|| {
                DateTime::parse_from_rfc2822(raw.trim())
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    // 反转义 HTML 实体并去掉首尾空白
    pub fn clean_html(text: &str) -> String {
        html_escape::decode_html_entities(text).trim().to_string()
    }
}
