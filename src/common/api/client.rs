use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, ClientBuilder, Response,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use super::error::ApiError;
use super::models::channel::ChannelItem;
use super::models::common::{ErrorResponse, ListResponse};
use super::models::search::SearchItem;
use super::models::video::VideoItem;
use super::provider::SearchProvider;
use crate::common::models::{ChannelStats, SearchHit, SearchOrder, VideoDetails};

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 客户端，通过 `key` 参数鉴权
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    inner: Client,
    api_base: String,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>, api_base: &str) -> Result<Self, ApiError> {
        // 提前校验地址，避免每次请求才发现
        Url::parse(api_base)?;

        let inner = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .default_headers(Self::get_default_headers())
            .build()?;

        Ok(Self {
            inner,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn get_default_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "ytscout/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_base, name)
    }

    // 通用请求
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(endpoint);
        // 日志里不输出 key
        debug!("API请求: {} 参数: {:?}", url, params);

        let resp = self
            .inner
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("请求失败: {}", e);
                ApiError::Reqwest(e)
            })?;

        Self::handle_response::<T>(resp).await
    }

    // 处理响应
    async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            // 优先使用平台返回的错误信息
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            error!("解析错误: {}", e);
            ApiError::InvalidResponse(format!("解析响应失败: {}", e))
        })
    }
}

#[async_trait]
impl SearchProvider for YoutubeClient {
    async fn search_videos(
        &self,
        query: &str,
        published_after: Option<DateTime<Utc>>,
        order: Option<SearchOrder>,
        max_results: u32,
    ) -> Result<Vec<SearchHit>, ApiError> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(order) = order {
            params.push(("order", order.as_str().to_string()));
        }
        if let Some(after) = published_after {
            params.push((
                "publishedAfter",
                after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        let resp: ListResponse<SearchItem> = self.get("search", &params).await?;
        Ok(resp
            .items
            .into_iter()
            .filter_map(SearchItem::into_hit)
            .collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetails>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("part", "snippet,statistics,contentDetails".to_string()),
            ("id", ids.join(",")),
        ];
        let resp: ListResponse<VideoItem> = self.get("videos", &params).await?;
        Ok(resp.items.into_iter().map(VideoDetails::from).collect())
    }

    async fn channel_stats(&self, ids: &[String]) -> Result<Vec<ChannelStats>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = [("part", "statistics".to_string()), ("id", ids.join(","))];
        let resp: ListResponse<ChannelItem> = self.get("channels", &params).await?;
        Ok(resp.items.into_iter().map(ChannelStats::from).collect())
    }
}
