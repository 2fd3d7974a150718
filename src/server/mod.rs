//! HTTP surface: four POST endpoints plus a health check.

mod errors;
mod handlers;

pub use errors::ApiError;

use crate::config::{AppConfig, VideoConfig};
use crate::providers::{LlmProvider, ProviderFactory};
use crate::video::{self, VideoSearch};
use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Shared handler state, built once at startup.
///
/// A `None` provider puts the matching endpoints into demo mode.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn LlmProvider>>,
    pub video_search: Option<Arc<dyn VideoSearch>>,
    pub video_config: Arc<VideoConfig>,
}

impl AppState {
    /// Build the providers described by the configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout);
        AppState {
            llm: ProviderFactory::create_or_demo(&config.llm, timeout),
            video_search: video::create_or_demo(&config.video, timeout),
            video_config: Arc::new(config.video.clone()),
        }
    }

    /// State with no providers at all
    pub fn demo(video_config: VideoConfig) -> Self {
        AppState {
            llm: None,
            video_search: None,
            video_config: Arc::new(video_config),
        }
    }
}

/// Creates the router with all the application routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/analyze-image", post(handlers::analyze_image))
        .route("/api/generate-recipe", post(handlers::generate_recipe))
        .route(
            "/api/generate-recipe/detail",
            post(handlers::generate_recipe_detail),
        )
        .route("/api/search-youtube", post(handlers::search_youtube))
        .with_state(state)
}

/// Serve the application on an already bound listener until Ctrl-C.
pub async fn run(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        // Without a signal handler the server runs until the process is killed
        Err(_) => std::future::pending::<()>().await,
    }
}
