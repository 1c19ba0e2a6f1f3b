use chrono::NaiveDate;
use serde::Serializer;
use serde_derive::Serialize;
use std::fmt;

// 单个视频的解析结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub id: String,          // realID
    pub url: String,         // 直接可播放的视频流地址
    pub ext: String,         // 固定为 mp4
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub view_count: u64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_upload_date"
    )]
    pub upload_date: Option<NaiveDate>,
}

// 指向另一次解析的延迟引用，由调度方决定何时解析
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "_type", rename = "url")]
pub struct UrlReference {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_key: Option<String>,
}

impl UrlReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ie_key: None,
        }
    }

    // 指定由哪个解析器处理该地址
    pub fn with_ie_key(url: impl Into<String>, ie_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ie_key: Some(ie_key.into()),
        }
    }
}

// 多分段视频的解析结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub title: String,
    pub entries: Vec<UrlReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum ExtractResult {
    Video(VideoRecord),
    Playlist(PlaylistRecord),
}

impl ExtractResult {
    pub fn id(&self) -> &str {
        match self {
            Self::Video(v) => &v.id,
            Self::Playlist(p) => &p.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Video(v) => &v.title,
            Self::Playlist(p) => &p.title,
        }
    }
}

impl fmt::Display for ExtractResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video(v) => write!(f, "视频 {}: {}", v.id, v.title),
            Self::Playlist(p) => write!(f, "播放列表 {}: {} ({} 个分段)", p.id, p.title, p.entries.len()),
        }
    }
}

// 上传日期按 YYYYMMDD 输出
fn serialize_upload_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format("%Y%m%d").to_string()),
        None => serializer.serialize_none(),
    }
}
