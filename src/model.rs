use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ordered list of free-text ingredient names
pub type IngredientList = Vec<String>;

/// A suggested dish, either parsed from an LLM reply or taken from the demo table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_calories")]
    pub calories: u32,
}

impl Recipe {
    /// A recipe is usable when every list a cook needs is present
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.ingredients.is_empty()
            && !self.instructions.is_empty()
    }
}

/// Step-by-step walkthrough for a single recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detailed_instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accepts `480`, `480.5` or strings such as `"480kcal"` / `"約480"`.
fn lenient_calories<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .map(|n| n.min(u32::MAX as u64) as u32)
            .unwrap_or(0),
        Value::String(s) => s
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0),
        _ => 0,
    })
}
