use crate::demo;
use crate::error::{KondateError, Result};
use crate::extract::extract_json;
use crate::model::RecipeDetail;
use crate::providers::{build_detail_prompt, CompletionRequest, LlmProvider, DETAIL_SYSTEM_PROMPT};
use log::{error, info, warn};

const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 1200;

pub const MISSING_FIELDS: &str = "献立名と食材リストが必要です";

/// Both fields, or the 400 error when either is missing.
pub fn require_fields(
    recipe_name: Option<String>,
    ingredients: Option<Vec<String>>,
) -> Result<(String, Vec<String>)> {
    match (recipe_name, ingredients) {
        (Some(name), Some(list)) if !name.is_empty() && !list.is_empty() => Ok((name, list)),
        _ => Err(KondateError::InvalidInput(MISSING_FIELDS.to_string())),
    }
}

/// Detailed walkthrough for one recipe.
///
/// Never fails: every provider or parsing problem yields the generic
/// walkthrough. The returned name is always `recipe_name`.
pub async fn expand(
    llm: Option<&dyn LlmProvider>,
    recipe_name: &str,
    ingredients: &[String],
) -> RecipeDetail {
    let Some(llm) = llm else {
        info!("No LLM provider configured, serving generic detail for {recipe_name}");
        return demo::generic_detail(recipe_name);
    };

    let request = CompletionRequest {
        system: DETAIL_SYSTEM_PROMPT.to_string(),
        user: build_detail_prompt(recipe_name, ingredients),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        json_mode: true,
    };

    let reply = match llm.complete(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Detail expansion with {} failed: {}", llm.provider_name(), e);
            return demo::generic_detail(recipe_name);
        }
    };

    match parse_detail(&reply) {
        Ok(mut detail) if !detail.detailed_instructions.is_empty() => {
            detail.name = recipe_name.to_string();
            detail
        }
        Ok(_) => {
            warn!("Reply for {recipe_name} had no instructions");
            demo::generic_detail(recipe_name)
        }
        Err(e) => {
            warn!("Could not parse detail for {recipe_name}: {e}");
            demo::generic_detail(recipe_name)
        }
    }
}

fn parse_detail(reply: &str) -> Result<RecipeDetail> {
    Ok(serde_json::from_value(extract_json(reply)?)?)
}
