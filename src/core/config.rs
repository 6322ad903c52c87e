use std::env;

use crate::errors::DigestError;
use crate::slack::blocks::{DEFAULT_MAX_CHUNK_LEN, SLACK_SECTION_TEXT_LIMIT};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 14;
/// Ten years; keeps the window start representable as a timestamp.
pub const MAX_LOOKBACK_DAYS: u32 = 3650;
pub const DEFAULT_PAGE_LIMIT: usize = 100;
pub const DEFAULT_OPENAI_MODEL: &str = openai_api_rs::v1::common::GPT4_O;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub productboard_api_token: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    /// Slack channel ID the analysis is posted to.
    pub product_team_channel: String,
    pub lookback_days: u32,
    pub page_limit: usize,
    pub max_chunk_len: usize,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::ConfigError` naming the first missing or
    /// malformed variable.
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::ConfigError` naming the first missing or
    /// malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| DigestError::ConfigError(format!("{key} is not set")))
        };

        let lookback_days = parse_positive(get("FEEDBACK_LOOKBACK_DAYS"), "FEEDBACK_LOOKBACK_DAYS")?
            .unwrap_or(DEFAULT_LOOKBACK_DAYS);
        let page_limit = parse_positive(get("PRODUCTBOARD_PAGE_LIMIT"), "PRODUCTBOARD_PAGE_LIMIT")?
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        let max_chunk_len = parse_positive(get("SLACK_MAX_CHUNK_LEN"), "SLACK_MAX_CHUNK_LEN")?
            .unwrap_or(DEFAULT_MAX_CHUNK_LEN);

        if lookback_days > MAX_LOOKBACK_DAYS {
            return Err(DigestError::ConfigError(format!(
                "FEEDBACK_LOOKBACK_DAYS must not exceed {MAX_LOOKBACK_DAYS}, got {lookback_days}"
            )));
        }
        if max_chunk_len > SLACK_SECTION_TEXT_LIMIT {
            return Err(DigestError::ConfigError(format!(
                "SLACK_MAX_CHUNK_LEN must not exceed {SLACK_SECTION_TEXT_LIMIT}, got {max_chunk_len}"
            )));
        }

        Ok(Self {
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            productboard_api_token: required("PRODUCTBOARD_API_TOKEN")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL"),
            product_team_channel: required("PRODUCT_TEAM_CHANNEL")?,
            lookback_days,
            page_limit,
            max_chunk_len,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }
}

fn parse_positive<T>(raw: Option<String>, key: &str) -> Result<Option<T>, DigestError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| DigestError::ConfigError(format!("{key}: expected a number, got {raw:?}")))?;
    if value < T::from(1) {
        return Err(DigestError::ConfigError(format!(
            "{key}: must be at least 1"
        )));
    }
    Ok(Some(value))
}
