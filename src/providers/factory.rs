use crate::config::LlmConfig;
use crate::error::{KondateError, Result};
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(config: &LlmConfig, timeout: Duration) -> Result<Arc<dyn LlmProvider>> {
        match config.provider.as_str() {
            "openai" => Ok(Arc::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Arc::new(AnthropicProvider::new(config, timeout)?)),
            other => Err(KondateError::UnknownProvider(other.to_string())),
        }
    }

    /// Like `create`, but any failure means demo mode instead of an error.
    ///
    /// A missing credential is the expected way to run without a provider and
    /// is only reported at info level.
    pub fn create_or_demo(config: &LlmConfig, timeout: Duration) -> Option<Arc<dyn LlmProvider>> {
        match Self::create(config, timeout) {
            Ok(provider) => {
                info!(
                    "Using LLM provider '{}' with model {}",
                    provider.provider_name(),
                    config.model_name()
                );
                Some(provider)
            }
            Err(KondateError::MissingCredential(msg)) => {
                info!("{msg}; recipe generation runs in demo mode");
                None
            }
            Err(e) => {
                warn!("Failed to initialize LLM provider: {e}; running in demo mode");
                None
            }
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}
