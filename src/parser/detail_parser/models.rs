use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::parser::errors::ParseError;

// contentv3 接口的返回，只关心 media 字段
#[derive(Debug, Deserialize, Clone)]
pub struct ContentInfoResponse {
    pub media: ContentInfo,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentInfo {
    pub chapters: Vec<ChapterInfo>,
    pub title: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub views: u64,
    pub url: Option<String>, // 该内容对应的页面地址
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChapterInfo {
    pub tc_start: String, // 形如 <realID>-<偏移>
    pub title: String,
    pub preview: String,
    pub description: String,
    pub url: Option<String>,
    pub date_diffusion: Option<String>,
}

impl ChapterInfo {
    // tc_start 第一个 '-' 之前的部分，没有 '-' 时取整个字符串
    pub fn chapter_id(&self) -> &str {
        self.tc_start
            .split_once('-')
            .map_or(self.tc_start.as_str(), |(id, _)| id)
    }
}

impl ContentInfo {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let resp: ContentInfoResponse = serde_json::from_str(body)?;
        if resp.media.chapters.is_empty() {
            return Err(ParseError::MalformedResponse("chapters 为空".to_string()));
        }
        Ok(resp.media)
    }

    pub fn first_chapter(&self) -> Result<&ChapterInfo, ParseError> {
        self.chapters
            .first()
            .ok_or_else(|| ParseError::MalformedResponse("chapters 为空".to_string()))
    }

    // 分段自身的播放页地址
    pub fn playable_url(&self) -> Result<&str, ParseError> {
        self.url
            .as_deref()
            .or_else(|| self.chapters.first().and_then(|c| c.url.as_deref()))
            .ok_or_else(|| ParseError::MalformedResponse("缺少 url 字段".to_string()))
    }
}

// 分段的 contentv3 返回只用到 url，其余字段缺失也不影响
#[derive(Debug, Deserialize, Clone)]
pub struct ChapterContentResponse {
    pub media: ChapterContent,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChapterContent {
    pub url: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterLink>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChapterLink {
    pub url: Option<String>,
}

impl ChapterContent {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let resp: ChapterContentResponse = serde_json::from_str(body)?;
        Ok(resp.media)
    }

    pub fn playable_url(&self) -> Result<&str, ParseError> {
        self.url
            .as_deref()
            .or_else(|| self.chapters.first().and_then(|c| c.url.as_deref()))
            .ok_or_else(|| ParseError::MalformedResponse("缺少 url 字段".to_string()))
    }
}

// player 接口的返回，player 字段是一段 HTML
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerInfo {
    pub player: String,
}

impl PlayerInfo {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(body)?)
    }
}

// 播放数可能是数字也可能是字符串
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("无效的播放数: {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的播放数: {}", s))),
        other => Err(serde::de::Error::custom(format!("无效的播放数: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(tc_start: &str) -> ChapterInfo {
        ChapterInfo {
            tc_start: tc_start.to_string(),
            title: String::new(),
            preview: String::new(),
            description: String::new(),
            url: None,
            date_diffusion: None,
        }
    }

    #[test]
    fn test_chapter_id() {
        assert_eq!(chapter("10631273-0").chapter_id(), "10631273");
        assert_eq!(chapter("10631273-0-12").chapter_id(), "10631273");
        assert_eq!(chapter("10631273").chapter_id(), "10631273");
        assert_eq!(chapter("").chapter_id(), "");
    }

    #[test]
    fn test_parse_content_info() {
        let body = r#"{"media": {
            "title": "World War Z",
            "views": "1234",
            "chapters": [{
                "tc_start": "10631273-0",
                "title": "World War Z - Philadelphia VOST",
                "preview": "http://t.wat.tv/p.jpg",
                "description": "desc",
                "date_diffusion": "2013-06-21 10:00:00"
            }]
        }}"#;
        let info = ContentInfo::from_json(body).unwrap();
        assert_eq!(info.views, 1234);
        assert_eq!(info.first_chapter().unwrap().chapter_id(), "10631273");
        assert!(info.url.is_none());
        assert!(info.playable_url().is_err());
    }

    #[test]
    fn test_malformed_content_info() {
        for body in [
            "<html>not json</html>",
            r#"{"other": {}}"#,
            r#"{"media": {"title": "t", "views": 1, "chapters": []}}"#,
            r#"{"media": {"title": "t", "views": -1, "chapters": []}}"#,
            r#"{"media": {"views": 1, "chapters": [{"tc_start": "1"}]}}"#,
        ] {
            assert!(
                matches!(ContentInfo::from_json(body), Err(ParseError::MalformedResponse(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn test_playable_url_falls_back_to_first_chapter() {
        let body = r#"{"media": {
            "title": "Partie 1",
            "views": 1,
            "chapters": [
                {"tc_start": "201-0", "title": "a", "preview": "", "description": "",
                 "url": "http://www.wat.tv/video/partie-1-x201_2fjr7_.html"},
                {"tc_start": "202-0", "title": "b", "preview": "", "description": "",
                 "url": "http://www.wat.tv/video/partie-2-x202_2fjr7_.html"}
            ]
        }}"#;
        let info = ContentInfo::from_json(body).unwrap();
        assert_eq!(
            info.playable_url().unwrap(),
            "http://www.wat.tv/video/partie-1-x201_2fjr7_.html"
        );

        let chapter = ChapterContent::from_json(body).unwrap();
        assert_eq!(
            chapter.playable_url().unwrap(),
            "http://www.wat.tv/video/partie-1-x201_2fjr7_.html"
        );
    }

    #[test]
    fn test_chapter_content_only_needs_url() {
        let chapter = ChapterContent::from_json(
            r#"{"media": {"url": "http://www.wat.tv/video/partie-x201_2fjr7_.html"}}"#,
        )
        .unwrap();
        assert_eq!(
            chapter.playable_url().unwrap(),
            "http://www.wat.tv/video/partie-x201_2fjr7_.html"
        );

        // media.url 优先于分段自身的 url
        let chapter = ChapterContent::from_json(
            r#"{"media": {"url": "http://a/1.html", "chapters": [{"url": "http://a/2.html"}]}}"#,
        )
        .unwrap();
        assert_eq!(chapter.playable_url().unwrap(), "http://a/1.html");

        let chapter = ChapterContent::from_json(r#"{"media": {"chapters": [{}]}}"#).unwrap();
        assert!(matches!(chapter.playable_url(), Err(ParseError::MalformedResponse(_))));
        assert!(matches!(
            ChapterContent::from_json(r#"{"other": {}}"#),
            Err(ParseError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_player_info_requires_player() {
        assert!(PlayerInfo::from_json(r#"{"player": "<iframe src=\"x\">"}"#).is_ok());
        assert!(matches!(
            PlayerInfo::from_json(r#"{"html": ""}"#),
            Err(ParseError::MalformedResponse(_))
        ));
    }
}
