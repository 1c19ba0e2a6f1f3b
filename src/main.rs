use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use wat_dl::common::client::client::{ClientConfig, DEFAULT_USER_AGENT, WatClient};
use wat_dl::common::logger::PrettyLogger;
use wat_dl::parser::VideoParser;
use wat_dl::parser::detail_parser::ParserOptions;
use wat_dl::parser::errors::ParseError;
use wat_dl::parser::models::{ExtractResult, VideoRecord};
use wat_dl::{log_error, log_success};

mod cli;

/// 从命令行参数生成客户端配置和解析选项
fn create_options(args: &cli::Cli) -> (ClientConfig, ParserOptions) {
    let client_config = ClientConfig {
        timeout: Duration::from_secs(args.timeout),
        user_agent: args
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    };
    let options = ParserOptions {
        chapter_concurrency: args.concurrency as usize,
        reuse_content_info: !args.no_reuse,
    };
    (client_config, options)
}

// 单个视频摘要中要显示的字段，播放数按原始数字输出
fn video_fields(video: &VideoRecord) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("id", video.id.clone()),
        ("url", video.url.clone()),
        ("thumbnail", video.thumbnail.clone()),
        ("views", video.view_count.to_string()),
    ];
    if let Some(date) = video.upload_date {
        fields.push(("upload_date", date.format("%Y-%m-%d").to_string()));
    }
    fields.push(("description", video.description.clone()));
    fields
}

fn failure_message(err: &ParseError) -> String {
    format!("解析失败: {}", err)
}

fn print_result(result: &ExtractResult) {
    PrettyLogger::separator();
    match result {
        ExtractResult::Video(video) => {
            PrettyLogger::video_info(&video.title, &video.ext);
            for (label, value) in video_fields(video) {
                PrettyLogger::field(label, value);
            }
        }
        ExtractResult::Playlist(playlist) => {
            PrettyLogger::playlist_info(&playlist.title, playlist.entries.len());
            PrettyLogger::field("id", &playlist.id);
            for (i, entry) in playlist.entries.iter().enumerate() {
                PrettyLogger::entry(i + 1, &entry.url);
            }
        }
    }
    PrettyLogger::separator();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let (client_config, options) = create_options(&args);
    debug!("解析选项: {:?}", options);

    let client = WatClient::with_config(&client_config)?;
    let parser = VideoParser::new(&client, options);

    // 失败只报告一次
    let result = parser.parse(&args.url).await.map_err(|e| {
        log_error!("{}", failure_message(&e));
        e
    })?;
    debug!("解析结果 id: {}, 标题: {}", result.id(), result.title());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
        log_success!("解析完成: {}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_video() -> VideoRecord {
        VideoRecord {
            id: "10631273".to_string(),
            url: "http://ios.wat.tv/v.mp4".to_string(),
            ext: "mp4".to_string(),
            title: "World War Z".to_string(),
            thumbnail: "http://s.wat.fr/p.jpg".to_string(),
            description: "desc".to_string(),
            view_count: 123_456_789,
            upload_date: NaiveDate::from_ymd_opt(2013, 6, 21),
        }
    }

    #[test]
    fn test_views_printed_as_plain_count() {
        let fields = video_fields(&sample_video());
        let views = fields.iter().find(|(label, _)| *label == "views").unwrap();
        assert_eq!(views.1, "123456789");
        assert!(fields.iter().all(|(_, value)| !value.contains('万') && !value.contains('亿')));
        assert!(fields.contains(&("upload_date", "2013-06-21".to_string())));
    }

    #[test]
    fn test_failure_message() {
        let err = ParseError::PatternNotFound("real id".to_string());
        assert_eq!(failure_message(&err), format!("解析失败: {}", err));
        assert_eq!(failure_message(&err).matches("解析失败").count(), 1);
    }
}
