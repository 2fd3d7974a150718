//! Client side of the four endpoints and the session that sequences them.

mod session;

pub use session::{Session, SessionState, DETAIL_FAILURE_NOTICE};

use crate::error::{KondateError, Result};
use crate::model::RecipeDetail;
use crate::pipelines::{ingredients::IngredientsResponse, recipes::RecipesResponse, videos::VideosResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

/// The four calls a session makes
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn analyze_menu(&self, menu: &str) -> Result<IngredientsResponse>;

    async fn generate_recipes(&self, ingredients: &[String]) -> Result<RecipesResponse>;

    async fn recipe_detail(&self, recipe_name: &str, ingredients: &[String])
        -> Result<RecipeDetail>;

    async fn search_videos(&self, recipe_name: &str) -> Result<VideosResponse>;
}

/// HTTP client for a running kondate server
pub struct KondateClient {
    client: Client,
    base_url: String,
}

impl KondateClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(KondateClient {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post<B: Serialize + ?Sized + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(KondateError::Api {
                status: status.as_u16(),
                message: body["error"]
                    .as_str()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecipeApi for KondateClient {
    async fn analyze_menu(&self, menu: &str) -> Result<IngredientsResponse> {
        self.post("/api/analyze-image", &json!({ "menu": menu })).await
    }

    async fn generate_recipes(&self, ingredients: &[String]) -> Result<RecipesResponse> {
        self.post("/api/generate-recipe", &json!({ "ingredients": ingredients }))
            .await
    }

    async fn recipe_detail(
        &self,
        recipe_name: &str,
        ingredients: &[String],
    ) -> Result<RecipeDetail> {
        self.post(
            "/api/generate-recipe/detail",
            &json!({ "recipeName": recipe_name, "ingredients": ingredients }),
        )
        .await
    }

    async fn search_videos(&self, recipe_name: &str) -> Result<VideosResponse> {
        self.post("/api/search-youtube", &json!({ "recipeName": recipe_name }))
            .await
    }
}
