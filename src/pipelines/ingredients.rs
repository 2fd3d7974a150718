use crate::demo;
use crate::error::{KondateError, Result};
use crate::model::IngredientList;
use crate::pipelines::is_absent;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_MENU: &str = "メニュー名が必要です";
pub const ERROR_FALLBACK_MESSAGE: &str = "エラーが発生しましたが、デモ用の食材リストを返します";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientsResponse {
    pub ingredients: IngredientList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Split free text on ASCII commas, Japanese commas and any whitespace
/// (the full-width space included).
pub fn split_menu(text: &str) -> IngredientList {
    text.split(|c: char| c == ',' || c == '、' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Turn a `menu` value into an ingredient list.
///
/// Strings are split, arrays pass through (string entries only). Anything that
/// ends up empty is replaced by a random demo triple.
pub fn analyze(menu: Option<&Value>) -> Result<IngredientsResponse> {
    analyze_with(menu, &mut rand::thread_rng())
}

fn analyze_with<R: Rng + ?Sized>(menu: Option<&Value>, rng: &mut R) -> Result<IngredientsResponse> {
    if is_absent(menu) {
        return Err(KondateError::InvalidInput(MISSING_MENU.to_string()));
    }

    let ingredients = match menu {
        Some(Value::String(text)) => split_menu(text),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    };

    if ingredients.is_empty() {
        info!("No ingredients in menu, using a demo ingredient list");
        return Ok(IngredientsResponse {
            ingredients: demo::random_ingredients(rng),
            message: None,
        });
    }

    Ok(IngredientsResponse {
        ingredients,
        message: None,
    })
}

/// Response for a request that could not be read at all.
pub fn error_fallback() -> IngredientsResponse {
    error_fallback_with(&mut rand::thread_rng())
}

fn error_fallback_with<R: Rng + ?Sized>(rng: &mut R) -> IngredientsResponse {
    IngredientsResponse {
        ingredients: demo::random_ingredients(rng),
        message: Some(ERROR_FALLBACK_MESSAGE.to_string()),
    }
}
