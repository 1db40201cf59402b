use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::{log_api_request, log_api_result};

use super::content::SearchResponse;
use super::types::SearchType;

/// Operations the controller needs from the search backend
#[async_trait]
pub trait MusicApi: Send + Sync {
    /// `GET /health`; any 2xx counts as healthy
    async fn health(&self) -> Result<(), ApiError>;

    /// `GET /search/{kind}?q=&offset=&limit=`
    async fn search(
        &self,
        kind: SearchType,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<SearchResponse, ApiError>;
}

/// reqwest-backed client for the music search proxy
#[derive(Clone)]
pub struct HttpMusicApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMusicApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, kind: SearchType, query: &str, offset: u32, limit: u32) -> String {
        format!(
            "{}/search/{}?q={}&offset={}&limit={}",
            self.base_url,
            kind.path(),
            urlencoding::encode(query),
            offset,
            limit
        )
    }

    async fn get(&self, url: &str) -> Result<String, ApiError> {
        let response = self.client.get(url).send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl MusicApi for HttpMusicApi {
    async fn health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base_url);
        log_api_request!("health", url = %url);
        let result = self.get(&url).await.map(|_| ());
        log_api_result!("health", result);
        result
    }

    async fn search(
        &self,
        kind: SearchType,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<SearchResponse, ApiError> {
        let url = self.search_url(kind, query, offset, limit);
        log_api_request!("search", kind = %kind, offset, limit, url = %url);

        let result = match self.get(&url).await {
            Ok(body) => serde_json::from_str::<SearchResponse>(&body).map_err(ApiError::from),
            Err(e) => Err(e),
        };
        log_api_result!("search", result);
        result
    }
}
