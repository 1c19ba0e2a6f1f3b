use std::collections::HashMap;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, info};
use url::Url;

use crate::common::client::client::Fetcher;
use crate::parser::detail_parser::models::{ChapterContent, ChapterInfo, ContentInfo, PlayerInfo};
use crate::parser::detail_parser::parser_trait::{Parser, ParserOptions};
use crate::parser::detector;
use crate::parser::errors::ParseError;
use crate::parser::models::{ExtractResult, PlaylistRecord, UrlReference, VideoRecord};
use crate::parser::patterns::{FieldExtractor, PageField, WatFieldExtractor};
use crate::parser::utils::FormatTool;

pub const IE_NAME: &str = "wat.tv";
const BASE_URL: &str = "http://www.wat.tv";

pub struct WatParser<'a> {
    client: &'a dyn Fetcher,
    extractor: Box<dyn FieldExtractor>,
    options: ParserOptions,
}

#[async_trait]
impl<'a> Parser for WatParser<'a> {
    fn name(&self) -> &'static str {
        IE_NAME
    }

    fn suitable(&self, url: &str) -> bool {
        detector::is_suitable(url)
    }

    async fn parse(&self, url: &str) -> Result<ExtractResult, ParseError> {
        let url = url.trim();
        let short_id = detector::extract_short_id(url)?;

        let webpage = self
            .download_webpage(url, &short_id, "Downloading webpage")
            .await?;
        let real_id = self.extractor.extract_field(&webpage, PageField::RealId)?;
        debug!("shortID: {}, realID: {}", short_id, real_id);

        let video_info = self.fetch_content_info(&real_id).await?;
        let first_chapter = video_info.first_chapter()?;

        if first_chapter.chapter_id() != real_id {
            info!("[{}] {}: Multipart video detected", IE_NAME, real_id);
            let entries = self.resolve_chapters(&real_id, &video_info).await?;
            return Ok(ExtractResult::Playlist(PlaylistRecord {
                id: real_id,
                title: video_info.title.clone(),
                entries,
            }));
        }

        // 单个视频需要用 shortID 去换播放地址
        let video = self
            .extract_single(&short_id, &real_id, &video_info, first_chapter)
            .await?;
        Ok(ExtractResult::Video(video))
    }
}

impl<'a> WatParser<'a> {
    pub fn new(client: &'a dyn Fetcher) -> Self {
        Self::with_options(client, ParserOptions::default())
    }

    pub fn with_options(client: &'a dyn Fetcher, options: ParserOptions) -> Self {
        Self {
            client,
            extractor: Box::new(WatFieldExtractor),
            options,
        }
    }

    // 替换页面字段的提取策略
    pub fn with_extractor(mut self, extractor: Box<dyn FieldExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    async fn download_webpage(
        &self,
        url: &str,
        video_id: &str,
        note: &str,
    ) -> Result<String, ParseError> {
        info!("[{}] {}: {}", IE_NAME, video_id, note);
        Ok(self.client.fetch(url).await?)
    }

    /// 请求 contentv3 接口，返回其中的 media 部分
    pub async fn fetch_content_info(&self, id: &str) -> Result<ContentInfo, ParseError> {
        // contentv4 会额外带上相关视频，这里用不到
        let url = format!("{}/interface/contentv3/{}", BASE_URL, id);
        let body = self
            .download_webpage(&url, id, "Downloading video info")
            .await?;
        ContentInfo::from_json(&body)
    }

    // 分段只需要页面地址，不做完整的 contentv3 校验
    async fn fetch_chapter_content(&self, id: &str) -> Result<ChapterContent, ParseError> {
        let url = format!("{}/interface/contentv3/{}", BASE_URL, id);
        let body = self
            .download_webpage(&url, id, "Downloading video info")
            .await?;
        ChapterContent::from_json(&body)
    }

    // 按分段顺序取得每个分段的页面地址
    async fn resolve_chapters(
        &self,
        real_id: &str,
        video_info: &ContentInfo,
    ) -> Result<Vec<UrlReference>, ParseError> {
        let mut known: HashMap<&str, &ContentInfo> = HashMap::new();
        if self.options.reuse_content_info {
            known.insert(real_id, video_info);
        }
        let known = &known;

        let chapter_ids: Vec<String> = video_info
            .chapters
            .iter()
            .map(|chapter| chapter.chapter_id().to_string())
            .collect();

        // buffered 保证输出顺序与分段顺序一致
        let urls: Vec<String> = stream::iter(chapter_ids)
            .map(|chapter_id| async move {
                if let Some(info) = known.get(chapter_id.as_str()) {
                    debug!("复用已获取的分段信息: {}", chapter_id);
                    return info.playable_url().map(str::to_string);
                }
                let info = self.fetch_chapter_content(&chapter_id).await?;
                info.playable_url().map(str::to_string)
            })
            .buffered(self.options.chapter_concurrency.max(1))
            .try_collect()
            .await?;

        Ok(urls
            .into_iter()
            .map(|url| UrlReference::with_ie_key(url, IE_NAME))
            .collect())
    }

    async fn extract_single(
        &self,
        short_id: &str,
        real_id: &str,
        video_info: &ContentInfo,
        first_chapter: &ChapterInfo,
    ) -> Result<VideoRecord, ParseError> {
        let player_data = serde_urlencoded::to_string(&[("shortVideoId", short_id), ("html5", "1")])
            .map_err(|e| ParseError::MalformedResponse(e.to_string()))?;
        let player_url = format!("{}/player?{}", BASE_URL, player_data);
        let player_body = self
            .download_webpage(&player_url, real_id, "Downloading player info")
            .await?;
        let player = PlayerInfo::from_json(&player_body)?.player;

        let html5_player = self
            .extractor
            .extract_field(&player, PageField::Html5Player)?;
        // iframe 地址可能是相对路径
        let html5_player = Url::parse(&player_url)?.join(&html5_player)?;
        debug!("html5 player: {}", html5_player);

        let player_webpage = self
            .download_webpage(html5_player.as_str(), real_id, "Downloading player webpage")
            .await?;
        let video_url = self
            .extractor
            .extract_field(&player_webpage, PageField::VideoUrl)?;

        let upload_date = first_chapter
            .date_diffusion
            .as_deref()
            .and_then(FormatTool::unified_strdate);

        Ok(VideoRecord {
            id: real_id.to_string(),
            url: video_url,
            ext: "mp4".to_string(),
            title: first_chapter.title.clone(),
            thumbnail: first_chapter.preview.clone(),
            description: first_chapter.description.clone(),
            view_count: video_info.views,
            upload_date,
        })
    }
}
