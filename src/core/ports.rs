//! Narrow seams over the three external providers.
//!
//! The run only depends on these traits, so tests can swap in doubles for
//! Productboard, `OpenAI` and Slack.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::models::{FeedbackNote, PageRequest};
use crate::errors::DigestError;

#[async_trait]
pub trait FeedbackSource: Send + Sync {
    /// Fetches a single page of notes.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<FeedbackNote>, DigestError>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Sends `prompt` as one user message and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, DigestError>;
}

#[async_trait]
pub trait MessagePoster: Send + Sync {
    /// Posts one message made of `blocks` to `channel_id`.
    async fn post_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), DigestError>;
}
