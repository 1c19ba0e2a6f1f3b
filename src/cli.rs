use clap::Parser;

/// wat.tv 视频信息解析器
#[derive(Parser, Debug)]
#[command(name = "watdl")]
#[command(version = "0.1")]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "一个简单的 wat.tv 视频信息解析工具", long_about = None)]
pub struct Cli {
    /// 视频页面链接
    #[arg(long, value_name = "URL")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub url: String,

    /// 以 JSON 输出解析结果
    #[arg(long)]
    pub json: bool,

    /// 请求超时（秒）
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// 自定义 User-Agent
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// 多分段视频同时请求的分段数
    #[arg(long, value_name = "N", default_value_t = 1)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..=16))]
    pub concurrency: u64,

    /// 每个分段都重新请求 contentv3 接口
    #[arg(long)]
    pub no_reuse: bool,

    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}
