use serde::{Deserialize, Serialize};

/// One feedback record from the Productboard notes API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackNote {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl FeedbackNote {
    /// The text used to represent this note in the analysis prompt: `content`
    /// when non-empty, then `title`, then the empty string. Always trimmed.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.content
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.title.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("")
            .trim()
    }
}

/// Notes accumulated across every page of one run.
pub type FeedbackBatch = Vec<FeedbackNote>;

/// Envelope of a single notes page. A missing `data` key is an empty page.
#[derive(Debug, Deserialize)]
pub struct NotesPage {
    #[serde(default)]
    pub data: Vec<FeedbackNote>,
}

/// Query for one page of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
    /// Lookback filter, formatted as `"<days>d"`.
    pub last: String,
}

impl PageRequest {
    #[must_use]
    pub fn new(limit: usize, offset: usize, days: u32) -> Self {
        Self {
            limit,
            offset,
            last: lookback_param(days),
        }
    }
}

#[must_use]
pub fn lookback_param(days: u32) -> String {
    format!("{days}d")
}
