//! Productboard notes API client module

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::core::models::{FeedbackNote, NotesPage, PageRequest};
use crate::core::ports::FeedbackSource;
use crate::errors::DigestError;

pub const PRODUCTBOARD_API_NOTES_URL: &str = "https://api.productboard.com/notes";
pub const PRODUCTBOARD_API_VERSION: &str = "1";

pub struct ProductboardClient {
    http: Client,
    api_token: String,
}

impl ProductboardClient {
    #[must_use]
    pub fn new(http: Client, api_token: String) -> Self {
        Self { http, api_token }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("X-Version", HeaderValue::from_static(PRODUCTBOARD_API_VERSION));
        headers
    }
}

/// Query string pairs for one notes page.
#[must_use]
pub fn build_query(request: &PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("pageLimit", request.limit.to_string()),
        ("pageOffset", request.offset.to_string()),
        ("last", request.last.clone()),
    ]
}

/// # Errors
///
/// Returns `DigestError::ParseError` if the body is not a notes envelope.
pub fn parse_notes_page(body: &str) -> Result<Vec<FeedbackNote>, DigestError> {
    let page: NotesPage = serde_json::from_str(body)
        .map_err(|e| DigestError::ParseError(format!("Productboard notes response: {e}")))?;
    Ok(page.data)
}

/// Maps a non-2xx notes response to `DigestError::ProductboardError` with the
/// status, page offset and body.
///
/// # Errors
///
/// Returns `DigestError::ProductboardError` for any status outside 2xx.
pub fn check_notes_status(status: StatusCode, body: &str, offset: usize) -> Result<(), DigestError> {
    if status.is_success() {
        return Ok(());
    }
    Err(DigestError::ProductboardError(format!(
        "GET notes HTTP {status} (offset={offset}): {body}"
    )))
}

#[async_trait]
impl FeedbackSource for ProductboardClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<FeedbackNote>, DigestError> {
        let resp = self
            .http
            .get(PRODUCTBOARD_API_NOTES_URL)
            .bearer_auth(&self.api_token)
            .headers(Self::headers())
            .query(&build_query(request))
            .send()
            .await?;

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) if !status.is_success() => format!("<failed to read body: {e}>"),
            Err(e) => return Err(e.into()),
        };
        check_notes_status(status, &body, request.offset)?;

        parse_notes_page(&body)
    }
}
