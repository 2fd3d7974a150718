use thiserror::Error;

/// Errors that can occur while generating recipes, details or videos
#[derive(Error, Debug)]
pub enum KondateError {
    /// HTTP transport failure talking to a provider or the server
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("{provider} returned {status}: {body}")]
    ProviderApi {
        provider: String,
        status: u16,
        body: String,
    },

    /// Provider answered but the reply had no usable content
    #[error("Missing content in {0} response")]
    MissingContent(String),

    /// No JSON object could be located in a free-text reply
    #[error("No JSON object found in reply")]
    JsonNotFound,

    /// JSON could not be parsed or did not have the expected shape
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Provider is configured but has no credential
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Provider name not known to the factory
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Required request field missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// Server answered a client call with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, KondateError>;
