//! Splitting the analysis into Slack section blocks.
//!
//! Slack rejects section text longer than [`SLACK_SECTION_TEXT_LIMIT`]
//! characters, so the analysis is cut into chunks that each fit one block.

use serde_json::{Value, json};

/// Slack's hard limit on the text of a single section block.
pub const SLACK_SECTION_TEXT_LIMIT: usize = 3000;

/// Default chunk size, kept under [`SLACK_SECTION_TEXT_LIMIT`] with margin.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 2900;

/// Slack accepts at most this many blocks in one message.
pub const SLACK_MAX_BLOCKS_PER_MESSAGE: usize = 50;

/// Splits `text` into chunks of at most `max_len` characters.
///
/// Each chunk takes the next `max_len` characters and, when that window holds
/// a newline after its first character, ends at the last such newline. The
/// newline itself and any further leading newlines are dropped before the next
/// chunk starts. A window with no usable newline is cut at exactly `max_len`
/// characters, even mid-word.
#[must_use]
pub fn split_text_for_blocks(text: &str, max_len: usize) -> Vec<&str> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let window_end = rest
            .char_indices()
            .nth(max_len)
            .map_or(rest.len(), |(idx, _)| idx);
        let mut chunk = &rest[..window_end];

        if let Some(last_newline) = chunk.rfind('\n')
            && last_newline > 0
        {
            chunk = &chunk[..last_newline];
        }

        chunks.push(chunk);
        rest = rest[chunk.len()..].trim_start_matches('\n');
    }

    chunks
}

/// Wraps each chunk in a `mrkdwn` section block.
#[must_use]
pub fn section_blocks(chunks: &[&str]) -> Value {
    Value::Array(
        chunks
            .iter()
            .map(|chunk| {
                json!({
                    "type": "section",
                    "text": {
                        "type": "mrkdwn",
                        "text": chunk,
                    }
                })
            })
            .collect(),
    )
}
