use tracing::{error, info, warn};

use crate::core::ports::MessagePoster;
use crate::slack::blocks::{SLACK_MAX_BLOCKS_PER_MESSAGE, section_blocks, split_text_for_blocks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Posted { chunks: usize },
    Failed { chunks: usize, reason: String },
}

/// Posts `analysis` to `channel_id` as one message of section blocks.
///
/// Delivery errors are logged and reported through the returned outcome
/// rather than propagated: by the time we post, the fetch and the analysis
/// have already succeeded.
pub async fn post_analysis<P>(
    poster: &P,
    channel_id: &str,
    analysis: &str,
    max_chunk_len: usize,
) -> DeliveryOutcome
where
    P: MessagePoster + ?Sized,
{
    let chunks = split_text_for_blocks(analysis, max_chunk_len);
    if chunks.len() > SLACK_MAX_BLOCKS_PER_MESSAGE {
        warn!(
            "Analysis needs {} blocks, Slack accepts at most {} per message",
            chunks.len(),
            SLACK_MAX_BLOCKS_PER_MESSAGE
        );
    }

    let blocks = section_blocks(&chunks);
    let text_fallback = chunks.first().copied().unwrap_or_default();

    match poster
        .post_blocks(channel_id, text_fallback, &blocks)
        .await
    {
        Ok(()) => {
            info!(
                "Posted formatted trend analysis to Slack channel {} ({} blocks)",
                channel_id,
                chunks.len()
            );
            DeliveryOutcome::Posted {
                chunks: chunks.len(),
            }
        }
        Err(e) => {
            error!("Failed to post to Slack: {}", e);
            DeliveryOutcome::Failed {
                chunks: chunks.len(),
                reason: e.to_string(),
            }
        }
    }
}
