use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cookie_store::CookieStore;
use flate2::read::GzDecoder;
use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use reqwest_cookie_store::CookieStoreMutex;
use tracing::{debug, error};

use crate::common::client::error::ApiError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

/// 抓取网页正文的抽象，解析器只依赖这个接口
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ApiError>;
}

// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// 同一个解析过程中的请求共享 Cookie
#[derive(Debug, Clone)]
pub struct WatClient {
    pub inner: Client,
    pub cookie_store: Arc<CookieStoreMutex>,
}

impl WatClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let headers = Self::get_default_headers(&config.user_agent);
        let cookie_store = Arc::new(CookieStoreMutex::new(CookieStore::default()));

        let inner = ClientBuilder::new()
            .timeout(config.timeout)
            .cookie_provider(Arc::clone(&cookie_store))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                error!("Error creating client: {}", e);
                ApiError::Reqwest(e)
            })?;

        Ok(Self {
            inner,
            cookie_store,
        })
    }

    pub fn get_default_headers(user_agent: &str) -> HeaderMap {
        // 创建默认请求头
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,application/json;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("fr-FR,fr;q=0.9,en;q=0.8"),
        );
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        let user_agent = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(USER_AGENT, user_agent);

        headers
    }

    pub fn cookie_count(&self) -> usize {
        self.cookie_store
            .lock()
            .map(|store| store.iter_any().count())
            .unwrap_or(0)
    }

    // 通用 GET 请求，返回文本正文
    pub async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let resp = self.inner.get(url).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::Reqwest(e)
        })?;

        let text = Self::handle_response(resp).await?;
        debug!("当前 Cookie 数量: {}", self.cookie_count());
        Ok(text)
    }

    fn try_decompress(raw: &[u8]) -> Result<Vec<u8>, std::io::Error> {
        let mut decoder = GzDecoder::new(raw);
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded)?;
        Ok(decoded)
    }

    async fn handle_response(resp: Response) -> Result<String, ApiError> {
        let status = resp.status();
        let url = resp.url().to_string();

        if status.is_server_error() {
            error!("服务端错误 {}: {}", status, url);
            return Err(ApiError::RetryLater);
        }
        if !status.is_success() {
            error!("请求返回非成功状态 {}: {}", status, url);
            return Err(ApiError::HttpStatus(status.as_u16(), url));
        }

        let raw_body = resp.bytes().await?;

        // gzip 魔数开头的正文需要手动解压
        let body = if raw_body.starts_with(&[0x1f, 0x8b]) {
            Self::try_decompress(&raw_body)?
        } else {
            raw_body.to_vec()
        };

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl Fetcher for WatClient {
    async fn fetch(&self, url: &str) -> Result<String, ApiError> {
        self.get_text(url).await
    }
}
