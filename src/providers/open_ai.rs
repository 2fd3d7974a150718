use crate::config::LlmConfig;
use crate::error::{KondateError, Result};
use crate::providers::{CompletionRequest, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    structured_output: bool,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &LlmConfig, timeout: Duration) -> Result<Self> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                KondateError::MissingCredential(
                    "OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: config.model_name().to_string(),
            structured_output: config.structured_output,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            structured_output: true,
        }
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user}
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens
        });
        if request.json_mode && self.structured_output {
            body["response_format"] = json!({"type": "json_object"});
        }
        body
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KondateError::ProviderApi {
                provider: self.provider_name().to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| KondateError::MissingContent(self.provider_name().to_string()))?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn request(json_mode: bool) -> CompletionRequest {
        CompletionRequest {
            system: "あなたは料理の専門家です。".to_string(),
            user: "にんじん、豚肉".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            json_mode,
        }
    }

    #[tokio::test]
    async fn test_complete() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer fake_api_key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4",
                "max_tokens": 2000,
                "response_format": {"type": "json_object"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "{\"recipes\": []}"
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4".to_string(),
        );

        let result = provider.complete(&request(true)).await.unwrap();
        assert_eq!(result, r#"{"recipes": []}"#);
        mock.assert_async().await;
    }

    #[test]
    fn test_request_body_json_mode() {
        let mut provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            "http://localhost".to_string(),
            "gpt-4".to_string(),
        );
        assert!(provider.request_body(&request(false))["response_format"].is_null());
        assert_eq!(
            provider.request_body(&request(true))["response_format"]["type"],
            "json_object"
        );

        provider.structured_output = false;
        assert!(provider.request_body(&request(true))["response_format"].is_null());
    }

    #[tokio::test]
    async fn test_complete_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "quota exceeded"}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4".to_string(),
        );

        let result = provider.complete(&request(true)).await;
        assert!(matches!(
            result,
            Err(KondateError::ProviderApi { status: 429, .. })
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_missing_content() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4".to_string(),
        );

        let result = provider.complete(&request(true)).await;
        assert!(matches!(result, Err(KondateError::MissingContent(_))));
    }

    #[test]
    fn test_new_with_config_key() {
        let config = LlmConfig {
            api_key: Some("test-key".to_string()),
            ..LlmConfig::default()
        };
        let provider = OpenAIProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }
}
