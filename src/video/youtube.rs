use crate::config::VideoConfig;
use crate::error::{KondateError, Result};
use crate::model::Video;
use crate::video::{VideoQuery, VideoSearch};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Video search through the YouTube Data API v3 `search.list` endpoint.
pub struct YouTubeSearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeSearch {
    pub fn new(config: &VideoConfig, timeout: Duration) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                KondateError::MissingCredential(
                    "YOUTUBE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(YouTubeSearch {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        YouTubeSearch {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    fn provider_name(&self) -> &str {
        "youtube"
    }

    async fn search(&self, query: &VideoQuery) -> Result<Vec<Video>> {
        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query.query.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("order", "relevance"),
                ("videoDuration", query.duration.as_str()),
                ("relevanceLanguage", query.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KondateError::ProviderApi {
                provider: self.provider_name().to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: SearchListResponse = response.json().await?;
        debug!("YouTube returned {} items", body.items.len());

        Ok(body.items.into_iter().filter_map(SearchItem::into_video).collect())
    }
}

// ============================================================================
// YouTube Data API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl SearchItem {
    fn into_video(self) -> Option<Video> {
        let id = self.id.video_id?;
        let thumbnail = self
            .snippet
            .thumbnails
            .medium
            .or(self.snippet.thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_else(|| format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"));

        Some(Video {
            id,
            title: self.snippet.title,
            thumbnail,
            channel_title: self.snippet.channel_title,
            published_at: self.snippet.published_at,
            view_count: None,
            duration: None,
            description: Some(self.snippet.description),
        })
    }
}
