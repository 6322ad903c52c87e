//! Slack API client module
//!
//! Posts block messages through `chat.postMessage`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId};

use crate::core::ports::MessagePoster;
use crate::errors::DigestError;

const SLACK_CHAT_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Slack API client
pub struct SlackClient {
    http: Client,
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(http: Client, token: String) -> Self {
        Self {
            http,
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }
}

/// Build the JSON payload for `chat.postMessage` with blocks.
#[must_use]
pub fn build_post_message_payload(
    channel: &SlackChannelId,
    text_fallback: &str,
    blocks: &Value,
) -> Value {
    json!({
        "channel": channel.0,
        "text": text_fallback,
        "blocks": blocks,
    })
}

/// Maps a non-2xx HTTP status from a Slack Web API call to
/// `DigestError::ApiError`.
///
/// # Errors
///
/// Returns `DigestError::ApiError` for any status outside 2xx.
pub fn check_slack_status(method: &str, status: StatusCode) -> Result<(), DigestError> {
    if status.is_success() {
        return Ok(());
    }
    Err(DigestError::ApiError(format!("{method} HTTP {status}")))
}

/// Interprets a Slack Web API response body, surfacing Slack's `error` code
/// when `ok` is false.
///
/// # Errors
///
/// Returns `DigestError::ApiError` carrying Slack's error code.
pub fn check_slack_response(method: &str, body: &Value) -> Result<(), DigestError> {
    if body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        return Ok(());
    }

    Err(DigestError::ApiError(format!(
        "{method} error: {}",
        body.get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    )))
}

#[async_trait]
impl MessagePoster for SlackClient {
    async fn post_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), DigestError> {
        let payload = build_post_message_payload(
            &SlackChannelId(channel_id.to_string()),
            text_fallback,
            blocks,
        );

        let resp = self
            .http
            .post(SLACK_CHAT_POST_MESSAGE_URL)
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DigestError::ApiError(format!("Failed to post message: {e}")))?;

        check_slack_status("chat.postMessage", resp.status())?;

        let body: Value = resp.json().await.map_err(|e| {
            DigestError::ApiError(format!("chat.postMessage JSON parse error: {e}"))
        })?;

        check_slack_response("chat.postMessage", &body)
    }
}
