use crate::client::RecipeApi;
use crate::error::KondateError;
use crate::model::{Recipe, RecipeDetail, Video};
use log::{info, warn};

/// Shown in place of the walkthrough when the detail call fails.
pub const DETAIL_FAILURE_NOTICE: &str = "手順の取得に失敗しました。";
const EMPTY_RECIPES_ERROR: &str = "献立生成に失敗しました";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
    RecipesShown,
    DetailLoading,
    DetailShown,
}

/// One user's pass through the app: ingredient chips, suggestions, videos and
/// the walkthrough of the selected recipe.
///
/// Every transition is driven by a method call; nothing runs in the background.
pub struct Session<A: RecipeApi> {
    api: A,
    state: SessionState,
    ingredients: Vec<String>,
    recipes: Vec<Recipe>,
    videos: Vec<Video>,
    error: Option<String>,
    selected: Option<usize>,
    detail: Option<RecipeDetail>,
}

impl<A: RecipeApi> Session<A> {
    pub fn new(api: A) -> Self {
        Session {
            api,
            state: SessionState::Idle,
            ingredients: Vec::new(),
            recipes: Vec::new(),
            videos: Vec::new(),
            error: None,
            selected: None,
            detail: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn detail(&self) -> Option<&RecipeDetail> {
        self.detail.as_ref()
    }

    /// Add typed input as chips: commas become spaces, words already present are skipped.
    pub fn add_ingredients(&mut self, input: &str) {
        let normalized = input.trim().replace(['、', ','], " ");
        for word in normalized.split_whitespace() {
            if !self.ingredients.iter().any(|i| i == word) {
                self.ingredients.push(word.to_string());
            }
        }
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Ask for recipes, then for videos of the first one.
    ///
    /// Does nothing without ingredients. Failures end up in `error()` and the
    /// session goes back to `Idle`.
    pub async fn submit(&mut self) {
        if self.ingredients.is_empty() {
            return;
        }

        self.state = SessionState::Submitting;
        self.error = None;
        self.recipes.clear();
        self.videos.clear();
        self.selected = None;
        self.detail = None;

        match self.fetch_recipes_and_videos().await {
            Ok(()) => self.state = SessionState::RecipesShown,
            Err(message) => {
                warn!("Submission failed: {message}");
                self.error = Some(message);
                self.state = if self.recipes.is_empty() {
                    SessionState::Idle
                } else {
                    SessionState::RecipesShown
                };
            }
        }
    }

    async fn fetch_recipes_and_videos(&mut self) -> Result<(), String> {
        let response = self
            .api
            .generate_recipes(&self.ingredients)
            .await
            .map_err(describe)?;
        if response.recipes.is_empty() {
            return Err(EMPTY_RECIPES_ERROR.to_string());
        }
        info!("Received {} recipes", response.recipes.len());
        self.recipes = response.recipes;

        let first = self.recipes[0].name.clone();
        let videos = self.api.search_videos(&first).await.map_err(describe)?;
        self.videos = videos.videos;
        Ok(())
    }

    /// Load the walkthrough for recipe `index`.
    ///
    /// A failed call shows a one-line notice as the walkthrough instead of an error.
    pub async fn select_recipe(&mut self, index: usize) {
        let Some(recipe) = self.recipes.get(index) else {
            return;
        };
        let name = recipe.name.clone();

        self.selected = Some(index);
        self.detail = None;
        self.state = SessionState::DetailLoading;

        let detail = match self.api.recipe_detail(&name, &self.ingredients).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Detail for {name} failed: {e}");
                RecipeDetail {
                    name,
                    detailed_instructions: vec![DETAIL_FAILURE_NOTICE.to_string()],
                    tips: Vec::new(),
                }
            }
        };

        self.detail = Some(detail);
        self.state = SessionState::DetailShown;
    }

    /// Close the walkthrough and go back to the list.
    pub fn back(&mut self) {
        if self.state == SessionState::DetailShown {
            self.selected = None;
            self.detail = None;
            self.state = SessionState::RecipesShown;
        }
    }

    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.ingredients.clear();
        self.recipes.clear();
        self.videos.clear();
        self.error = None;
        self.selected = None;
        self.detail = None;
    }
}

fn describe(err: KondateError) -> String {
    match err {
        KondateError::Api { message, .. } => message,
        other => other.to_string(),
    }
}
