mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{
    build_detail_prompt, build_recipe_prompt, DETAIL_SYSTEM_PROMPT, RECIPE_SYSTEM_PROMPT,
};

use crate::error::Result;
use async_trait::async_trait;

/// A single chat completion call: one system prompt, one user prompt
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask for a reply that is a bare JSON object, where the provider can enforce it
    pub json_mode: bool,
}

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Run the completion and return the raw reply text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
