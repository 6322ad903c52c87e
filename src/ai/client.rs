//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call that turns the feedback prompt into
//! a trend analysis.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::core::ports::Summarizer;
use crate::errors::DigestError;

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating the trend analysis
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(http: Client, api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            http,
            api_key,
            org_id,
            model_name,
        }
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap, DigestError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| DigestError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                DigestError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }
}

/// The whole prompt as the single user message of the conversation.
#[must_use]
pub fn build_user_message(prompt: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(prompt.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// Builds the chat-completions request body carrying one user message.
#[must_use]
pub fn build_chat_request(model: &str, message: &ChatCompletionMessage) -> Value {
    json!({
        "model": model,
        "messages": [message],
    })
}

/// Maps a non-2xx chat-completions status to `DigestError::OpenAIError`
/// carrying the response body.
///
/// # Errors
///
/// Returns `DigestError::OpenAIError` for any status outside 2xx.
pub fn check_completion_status(status: StatusCode, body: &str) -> Result<(), DigestError> {
    if status.is_success() {
        return Ok(());
    }
    Err(DigestError::OpenAIError(format!(
        "OpenAI API error (status {status}): {body}"
    )))
}

/// Pulls the first choice's message text out of a chat-completions response.
///
/// # Errors
///
/// Returns `DigestError::OpenAIError` when the response has no choices or the
/// first choice carries no text.
pub fn extract_completion_text(response: &Value) -> Result<String, DigestError> {
    let choice = response
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .ok_or_else(|| DigestError::OpenAIError("response contained no choices".to_string()))?;

    choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
        .ok_or_else(|| {
            let reason = choice
                .get("finish_reason")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            DigestError::OpenAIError(format!(
                "first choice had no message content (finish_reason={reason})"
            ))
        })
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, DigestError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Sending prompt of {} characters to {}",
            prompt.chars().count(),
            self.model_name
        );

        info!("Estimated input tokens: {}", estimate_tokens(prompt));

        let request_body = build_chat_request(&self.model_name, &build_user_message(prompt));

        let response = self
            .http
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DigestError::OpenAIError(format!(
                "Failed to read OpenAI response body (status {status}): {e}"
            ))
        })?;
        check_completion_status(status, &body)?;

        let response_json: Value = serde_json::from_str(&body)
            .map_err(|e| DigestError::OpenAIError(format!("Failed to parse OpenAI response: {e}")))?;

        extract_completion_text(&response_json)
    }
}
