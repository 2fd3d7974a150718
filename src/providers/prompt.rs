/// System prompt for the four-recipe suggestion call.
pub const RECIPE_SYSTEM_PROMPT: &str = "あなたは料理の専門家です。与えられた食材を使って4つの異なるレシピを提案し、各レシピのカロリーも計算してください。";

/// System prompt for the detailed walkthrough call.
pub const DETAIL_SYSTEM_PROMPT: &str = "あなたは料理の専門家です。与えられた献立について、より丁寧で具体的な手順やコツを日本語で説明してください。";

/// User prompt templates, loaded at compile time so they can be edited
/// without dealing with Rust string syntax.
const RECIPE_PROMPT_TEMPLATE: &str = include_str!("recipe_prompt.txt");
const DETAIL_PROMPT_TEMPLATE: &str = include_str!("detail_prompt.txt");

/// Ingredients are listed with the Japanese comma, the way a cook would write them.
fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join("、")
}

/// Build the user prompt asking for four recipes from the given ingredients.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    RECIPE_PROMPT_TEMPLATE.replace("{ingredients}", &join_ingredients(ingredients))
}

/// Build the user prompt asking for a detailed walkthrough of one recipe.
pub fn build_detail_prompt(recipe_name: &str, ingredients: &[String]) -> String {
    DETAIL_PROMPT_TEMPLATE
        .replace("{recipe_name}", recipe_name.trim())
        .replace("{ingredients}", &join_ingredients(ingredients))
}
