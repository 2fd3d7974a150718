mod youtube;

pub use youtube::YouTubeSearch;

use crate::config::VideoConfig;
use crate::error::{KondateError, Result};
use crate::model::Video;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Parameters for one video search
#[derive(Debug, Clone)]
pub struct VideoQuery {
    /// Full query text, e.g. "豚肉と卵の甘辛炒め レシピ 作り方"
    pub query: String,
    pub max_results: u32,
    pub language: String,
    pub duration: String,
}

impl VideoQuery {
    /// Build the query for a recipe using the configured filters
    pub fn for_recipe(recipe_name: &str, config: &VideoConfig) -> Self {
        let query = match config.query_suffix.trim() {
            "" => recipe_name.trim().to_string(),
            suffix => format!("{} {}", recipe_name.trim(), suffix),
        };
        VideoQuery {
            query,
            max_results: config.max_results,
            language: config.language.clone(),
            duration: config.duration.clone(),
        }
    }
}

/// A relevance-ordered video search service
#[async_trait]
pub trait VideoSearch: Send + Sync {
    fn provider_name(&self) -> &str;

    async fn search(&self, query: &VideoQuery) -> Result<Vec<Video>>;
}

/// The configured video search provider, or `None` for demo mode.
pub fn create_or_demo(config: &VideoConfig, timeout: Duration) -> Option<Arc<dyn VideoSearch>> {
    match YouTubeSearch::new(config, timeout) {
        Ok(search) => {
            info!("Using YouTube Data API for video search");
            Some(Arc::new(search))
        }
        Err(KondateError::MissingCredential(msg)) => {
            info!("{msg}; video search runs in demo mode");
            None
        }
        Err(e) => {
            warn!("Failed to initialize video search: {e}; running in demo mode");
            None
        }
    }
}
