use crate::config::VideoConfig;
use crate::demo;
use crate::error::{KondateError, Result};
use crate::model::Video;
use crate::video::{VideoQuery, VideoSearch};
use log::{error, info};
use serde::{Deserialize, Serialize};

pub const MISSING_RECIPE_NAME: &str = "レシピ名が必要です";
pub const DEMO_MODE_MESSAGE: &str =
    "デモモード：実際のYouTube動画検索にはYouTube Data APIキーの設定が必要です";
pub const PROVIDER_ERROR_MESSAGE: &str =
    "YouTube APIでエラーが発生しましたが、デモ動画を表示します";
pub const ERROR_FALLBACK_MESSAGE: &str = "エラーが発生しましたが、デモ動画を表示します";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideosResponse {
    pub videos: Vec<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn require_recipe_name(recipe_name: Option<String>) -> Result<String> {
    recipe_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| KondateError::InvalidInput(MISSING_RECIPE_NAME.to_string()))
}

/// Videos for a recipe from the search provider, or the demo list.
pub async fn search(
    provider: Option<&dyn VideoSearch>,
    config: &VideoConfig,
    recipe_name: &str,
) -> VideosResponse {
    let Some(provider) = provider else {
        info!("No video search configured, serving demo videos for {recipe_name}");
        return VideosResponse {
            videos: retitle_demo_videos(
                demo::demo_videos(),
                recipe_name,
                &config.title_keywords,
                &config.default_keyword,
            ),
            message: Some(DEMO_MODE_MESSAGE.to_string()),
        };
    };

    let query = VideoQuery::for_recipe(recipe_name, config);
    match provider.search(&query).await {
        Ok(videos) => VideosResponse {
            videos,
            message: None,
        },
        Err(e) => {
            error!("Video search with {} failed: {}", provider.provider_name(), e);
            VideosResponse {
                videos: demo::demo_videos(),
                message: Some(PROVIDER_ERROR_MESSAGE.to_string()),
            }
        }
    }
}

/// Response for a request that could not be read at all.
pub fn error_fallback() -> VideosResponse {
    VideosResponse {
        videos: demo::demo_videos(),
        message: Some(ERROR_FALLBACK_MESSAGE.to_string()),
    }
}

/// Point the demo titles at the recipe's main ingredient.
///
/// The first keyword found in `recipe_name` replaces the first occurrence of
/// `default_keyword` in every title. No keyword match leaves titles untouched.
pub fn retitle_demo_videos(
    videos: Vec<Video>,
    recipe_name: &str,
    keywords: &[String],
    default_keyword: &str,
) -> Vec<Video> {
    let Some(keyword) = keywords
        .iter()
        .find(|k| !k.is_empty() && recipe_name.contains(k.as_str()))
    else {
        return videos;
    };
    if default_keyword.is_empty() {
        return videos;
    }

    videos
        .into_iter()
        .map(|video| Video {
            title: video.title.replacen(default_keyword, keyword, 1),
            ..video
        })
        .collect()
}
