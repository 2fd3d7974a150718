use crate::demo;
use crate::error::{KondateError, Result};
use crate::extract::{extract_json, parse_recipes};
use crate::model::Recipe;
use crate::providers::{build_recipe_prompt, CompletionRequest, LlmProvider, RECIPE_SYSTEM_PROMPT};
use log::{error, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of recipes every response carries
pub const RECIPE_COUNT: usize = 4;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

pub const MISSING_INGREDIENTS: &str = "食材リストが必要です";
pub const DEMO_MODE_MESSAGE: &str = "デモモード：実際のレシピ生成にはAI APIキーの設定が必要です";
pub const PROVIDER_ERROR_MESSAGE: &str = "エラーが発生しましたが、デモ用のレシピを返します";
pub const PARSE_ERROR_MESSAGE: &str = "AIの応答を解析できなかったため、デモ用のレシピを返します";
pub const PARTIAL_MESSAGE: &str = "AIの提案が4品に満たなかったため、デモ用のレシピで補っています";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The ingredient list, or the 400 error when it is missing or empty.
pub fn require_ingredients(ingredients: Option<Vec<String>>) -> Result<Vec<String>> {
    match ingredients {
        Some(list) if !list.is_empty() => Ok(list),
        _ => Err(KondateError::InvalidInput(MISSING_INGREDIENTS.to_string())),
    }
}

/// Suggest four recipes for the ingredients.
pub async fn generate(llm: Option<&dyn LlmProvider>, ingredients: &[String]) -> RecipesResponse {
    let Some(llm) = llm else {
        info!("No LLM provider configured, serving demo recipes");
        return demo_response(DEMO_MODE_MESSAGE);
    };

    let request = CompletionRequest {
        system: RECIPE_SYSTEM_PROMPT.to_string(),
        user: build_recipe_prompt(ingredients),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        json_mode: true,
    };

    let reply = match llm.complete(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Recipe generation with {} failed: {}", llm.provider_name(), e);
            return demo_response(PROVIDER_ERROR_MESSAGE);
        }
    };

    let parsed = match extract_json(&reply).and_then(parse_recipes) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Could not parse recipes from reply: {e}");
            return demo_response(PARSE_ERROR_MESSAGE);
        }
    };

    let complete: Vec<Recipe> = parsed.into_iter().filter(Recipe::is_complete).collect();
    if complete.is_empty() {
        warn!("Reply contained no complete recipe");
        return demo_response(PARSE_ERROR_MESSAGE);
    }

    let short = complete.len() < RECIPE_COUNT;
    if short {
        warn!(
            "Reply contained {} complete recipes, topping up from demo data",
            complete.len()
        );
    }

    RecipesResponse {
        recipes: fill_with_demo(complete, &mut rand::thread_rng()),
        message: short.then(|| PARTIAL_MESSAGE.to_string()),
    }
}

/// Response for a request that could not be read at all.
pub fn error_fallback() -> RecipesResponse {
    demo_response(PROVIDER_ERROR_MESSAGE)
}

fn demo_response(message: &str) -> RecipesResponse {
    RecipesResponse {
        recipes: demo::shuffled_recipes(&mut rand::thread_rng(), RECIPE_COUNT),
        message: Some(message.to_string()),
    }
}

/// Truncate to `RECIPE_COUNT`, or top up with shuffled demo recipes whose
/// names are not already taken.
fn fill_with_demo<R: Rng + ?Sized>(mut recipes: Vec<Recipe>, rng: &mut R) -> Vec<Recipe> {
    recipes.truncate(RECIPE_COUNT);
    if recipes.len() < RECIPE_COUNT {
        let extra: Vec<Recipe> = demo::shuffled_recipes(rng, demo::all_recipes().len())
            .into_iter()
            .filter(|candidate| recipes.iter().all(|r| r.name != candidate.name))
            .take(RECIPE_COUNT - recipes.len())
            .collect();
        recipes.extend(extra);
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    struct CannedProvider {
        reply: Option<String>,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            assert!(request.json_mode);
            self.reply
                .clone()
                .ok_or_else(|| KondateError::MissingContent("canned".to_string()))
        }
    }

    fn recipe_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "ingredients": ["豚肉 200g"],
            "instructions": ["焼く"],
            "calories": 500
        })
    }

    fn ingredients() -> Vec<String> {
        vec!["豚肉".to_string()]
    }

    fn assert_well_formed(response: &RecipesResponse) {
        assert_eq!(response.recipes.len(), RECIPE_COUNT);
        assert!(response.recipes.iter().all(Recipe::is_complete));
    }

    #[tokio::test]
    async fn test_demo_mode() {
        let response = generate(None, &ingredients()).await;
        assert_well_formed(&response);
        assert_eq!(response.message.as_deref(), Some(DEMO_MODE_MESSAGE));
    }

    #[tokio::test]
    async fn test_four_recipes_from_provider() {
        let reply = json!({
            "recipes": [recipe_json("A"), recipe_json("B"), recipe_json("C"), recipe_json("D"), recipe_json("E")]
        })
        .to_string();
        let provider = CannedProvider { reply: Some(reply) };

        let response = generate(Some(&provider), &ingredients()).await;
        assert_well_formed(&response);
        let names: Vec<_> = response.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_single_object_is_topped_up() {
        let reply = format!("はい、どうぞ。\n{}\n以上です。", recipe_json("親子丼"));
        let provider = CannedProvider { reply: Some(reply) };

        let response = generate(Some(&provider), &ingredients()).await;
        assert_well_formed(&response);
        assert_eq!(response.recipes[0].name, "親子丼");
        assert_eq!(response.message.as_deref(), Some(PARTIAL_MESSAGE));
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let provider = CannedProvider {
            reply: Some("レシピは思いつきませんでした".to_string()),
        };
        let response = generate(Some(&provider), &ingredients()).await;
        assert_well_formed(&response);
        assert_eq!(response.message.as_deref(), Some(PARSE_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_incomplete_recipes_fall_back() {
        let reply = json!({"recipes": [{"name": "名前だけ"}]}).to_string();
        let provider = CannedProvider { reply: Some(reply) };
        let response = generate(Some(&provider), &ingredients()).await;
        assert_well_formed(&response);
        assert_eq!(response.message.as_deref(), Some(PARSE_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = CannedProvider { reply: None };
        let response = generate(Some(&provider), &ingredients()).await;
        assert_well_formed(&response);
        assert_eq!(response.message.as_deref(), Some(PROVIDER_ERROR_MESSAGE));
    }

    #[test]
    fn test_fill_skips_duplicate_names() {
        let mut rng = StdRng::seed_from_u64(9);
        let existing = demo::all_recipes().into_iter().take(2).collect::<Vec<_>>();
        let filled = fill_with_demo(existing.clone(), &mut rng);
        assert_eq!(filled.len(), RECIPE_COUNT);
        assert_eq!(&filled[..2], &existing[..]);
        let mut names: Vec<_> = filled.iter().map(|r| r.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RECIPE_COUNT);
    }

    #[test]
    fn test_require_ingredients() {
        assert!(require_ingredients(None).is_err());
        assert!(require_ingredients(Some(vec![])).is_err());
        assert_eq!(
            require_ingredients(Some(vec!["卵".to_string()])).unwrap(),
            vec!["卵"]
        );
    }
}
