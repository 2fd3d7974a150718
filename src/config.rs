use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM provider used for recipe generation and detail expansion
    #[serde(default)]
    pub llm: LlmConfig,
    /// Video search provider
    #[serde(default)]
    pub video: VideoConfig,
    /// Request timeout in seconds for every outbound call
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            video: VideoConfig::default(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration for the LLM provider
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Provider name ("openai" or "anthropic")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API key (can also be set via OPENAI_API_KEY / ANTHROPIC_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    pub base_url: Option<String>,
    /// Model identifier, defaults to one matching the provider
    pub model: Option<String>,
    /// Ask the provider for a JSON-only reply where it supports one
    #[serde(default = "default_structured_output")]
    pub structured_output: bool,
}

impl LlmConfig {
    /// The configured model, or the default for the selected provider
    pub fn model_name(&self) -> &str {
        match self.model.as_deref() {
            Some(model) if !model.trim().is_empty() => model,
            _ if self.provider == "anthropic" => DEFAULT_ANTHROPIC_MODEL,
            _ => DEFAULT_OPENAI_MODEL,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            base_url: None,
            model: None,
            structured_output: default_structured_output(),
        }
    }
}

/// Configuration for the video search provider and its demo fallback
#[derive(Debug, Deserialize, Clone)]
pub struct VideoConfig {
    /// API key (can also be set via YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// relevanceLanguage filter
    #[serde(default = "default_language")]
    pub language: String,
    /// videoDuration filter ("short", "medium", "long")
    #[serde(default = "default_duration")]
    pub duration: String,
    /// Appended to the recipe name to build the search query
    #[serde(default = "default_query_suffix")]
    pub query_suffix: String,
    /// Ingredient words that rewrite demo titles when found in the recipe name
    #[serde(default = "default_title_keywords")]
    pub title_keywords: Vec<String>,
    /// Word in the demo titles that gets rewritten
    #[serde(default = "default_keyword")]
    pub default_keyword: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            max_results: default_max_results(),
            language: default_language(),
            duration: default_duration(),
            query_suffix: default_query_suffix(),
            title_keywords: default_title_keywords(),
            default_keyword: default_keyword(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_provider() -> String {
    "openai".to_string()
}

const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-latest";

fn default_structured_output() -> bool {
    true
}

fn default_max_results() -> u32 {
    3
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_duration() -> String {
    "medium".to_string()
}

fn default_query_suffix() -> String {
    "レシピ 作り方".to_string()
}

fn default_title_keywords() -> Vec<String> {
    vec![
        "豚肉".to_string(),
        "鶏肉".to_string(),
        "サーモン".to_string(),
    ]
}

fn default_keyword() -> String {
    "豚肉".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with KONDATE__ prefix
    /// 2. kondate.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: KONDATE__LLM__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `kondate.toml` and `KONDATE__*` environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("kondate").required(false))
        // Use double underscore for nested: KONDATE__VIDEO__API_KEY
        .add_source(
            Environment::with_prefix("KONDATE")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("video.title_keywords")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
