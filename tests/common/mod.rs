//! Hand-written doubles for the provider traits.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use feedback_digest::core::config::AppConfig;
use feedback_digest::core::models::{FeedbackNote, PageRequest};
use feedback_digest::core::ports::{FeedbackSource, MessagePoster, Summarizer};
use feedback_digest::errors::DigestError;
use serde_json::Value;

pub fn test_config() -> AppConfig {
    AppConfig {
        slack_bot_token: "xoxb-test".to_string(),
        productboard_api_token: "pb-test".to_string(),
        openai_api_key: "sk-test".to_string(),
        openai_org_id: None,
        openai_model: None,
        product_team_channel: "C0PRODUCT".to_string(),
        lookback_days: 14,
        page_limit: 100,
        max_chunk_len: 2900,
    }
}

pub fn notes(count: usize, offset: usize) -> Vec<FeedbackNote> {
    (0..count)
        .map(|i| FeedbackNote {
            id: Some(format!("note-{}", offset + i)),
            title: Some(format!("Title {}", offset + i)),
            content: Some(format!("Feedback {}", offset + i)),
        })
        .collect()
}

/// Serves pre-scripted page sizes in order and records every request.
pub struct ScriptedSource {
    pages: Mutex<VecDeque<Result<usize, String>>>,
    pub requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn with_pages(sizes: &[usize]) -> Self {
        Self::new(sizes.iter().map(|&n| Ok(n)).collect())
    }

    pub fn new(pages: Vec<Result<usize, String>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackSource for ScriptedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<FeedbackNote>, DigestError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.pages.lock().unwrap().pop_front() {
            Some(Ok(size)) => Ok(notes(size, request.offset)),
            Some(Err(msg)) => Err(DigestError::ProductboardError(msg)),
            None => panic!("unexpected page request at offset {}", request.offset),
        }
    }
}

pub struct StubSummarizer {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: Err(msg.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn complete(&self, prompt: &str) -> Result<String, DigestError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(DigestError::OpenAIError)
    }
}

#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub channel_id: String,
    pub text_fallback: String,
    pub blocks: Value,
}

pub struct RecordingPoster {
    fail_with: Option<String>,
    pub posts: Mutex<Vec<RecordedPost>>,
}

impl RecordingPoster {
    pub fn accepting() -> Self {
        Self {
            fail_with: None,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(slack_error: &str) -> Self {
        Self {
            fail_with: Some(slack_error.to_string()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePoster for RecordingPoster {
    async fn post_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), DigestError> {
        self.posts.lock().unwrap().push(RecordedPost {
            channel_id: channel_id.to_string(),
            text_fallback: text_fallback.to_string(),
            blocks: blocks.clone(),
        });
        match &self.fail_with {
            Some(code) => Err(DigestError::ApiError(format!(
                "chat.postMessage error: {code}"
            ))),
            None => Ok(()),
        }
    }
}
