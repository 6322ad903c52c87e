use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Missing or invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to fetch feedback notes: {0}")]
    ProductboardError(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(error: serde_json::Error) -> Self {
        DigestError::ParseError(error.to_string())
    }
}
