use crate::demo;
use crate::model::RecipeDetail;
use crate::pipelines::{
    detail,
    ingredient_list,
    ingredients::{self, IngredientsResponse},
    recipes::{self, RecipesResponse},
    text_field,
    videos::{self, VideosResponse},
};
use crate::server::{ApiError, AppState};
use axum::{body::Bytes, extract::State, Json};
use log::{info, warn};
use serde_json::Value;

/// Read a request body as JSON whatever its content type.
///
/// `None` means the body is not JSON at all. A JSON value that is not an
/// object simply has no fields.
fn parse_body(body: &Bytes, endpoint: &str) -> Option<Value> {
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Unreadable {endpoint} request: {e}");
            None
        }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// `POST /api/analyze-image`: menu text or list into ingredients.
pub async fn analyze_image(body: Bytes) -> Result<Json<IngredientsResponse>, ApiError> {
    let Some(request) = parse_body(&body, "analyze") else {
        return Ok(Json(ingredients::error_fallback()));
    };

    let response = ingredients::analyze(request.get("menu"))?;
    info!("Extracted {} ingredients", response.ingredients.len());
    Ok(Json(response))
}

/// `POST /api/generate-recipe`: four recipe suggestions.
pub async fn generate_recipe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecipesResponse>, ApiError> {
    let Some(request) = parse_body(&body, "recipe") else {
        return Ok(Json(recipes::error_fallback()));
    };

    let ingredients = recipes::require_ingredients(ingredient_list(request.get("ingredients")))?;
    info!("Generating recipes for {:?}", ingredients);
    Ok(Json(
        recipes::generate(state.llm.as_deref(), &ingredients).await,
    ))
}

/// `POST /api/generate-recipe/detail`: detailed walkthrough of one recipe.
pub async fn generate_recipe_detail(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecipeDetail>, ApiError> {
    let Some(request) = parse_body(&body, "detail") else {
        return Ok(Json(demo::generic_detail("")));
    };

    let (recipe_name, ingredients) = detail::require_fields(
        text_field(request.get("recipeName")),
        ingredient_list(request.get("ingredients")),
    )?;
    info!("Expanding recipe {recipe_name}");
    Ok(Json(
        detail::expand(state.llm.as_deref(), &recipe_name, &ingredients).await,
    ))
}

/// `POST /api/search-youtube`: videos for a recipe.
pub async fn search_youtube(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VideosResponse>, ApiError> {
    let Some(request) = parse_body(&body, "video") else {
        return Ok(Json(videos::error_fallback()));
    };

    let recipe_name = videos::require_recipe_name(text_field(request.get("recipeName")))?;
    info!("Searching videos for {recipe_name}");
    Ok(Json(
        videos::search(
            state.video_search.as_deref(),
            &state.video_config,
            &recipe_name,
        )
        .await,
    ))
}
