use tracing::info;

use crate::core::models::{FeedbackBatch, PageRequest};
use crate::core::ports::FeedbackSource;
use crate::errors::DigestError;

/// Collects every note created within the last `days` days.
///
/// Pages are requested at offsets `0, page_limit, 2 * page_limit, ...` until a
/// page comes back with fewer than `page_limit` notes. A short page is taken
/// as the end of the data; the notes API gives no total count to check
/// against.
///
/// # Errors
///
/// Returns the first error reported by `source`, without retrying, or
/// `DigestError::ConfigError` if `page_limit` is zero.
pub async fn fetch_feedback_notes<S>(
    source: &S,
    days: u32,
    page_limit: usize,
) -> Result<FeedbackBatch, DigestError>
where
    S: FeedbackSource + ?Sized,
{
    if page_limit == 0 {
        return Err(DigestError::ConfigError(
            "page limit must be at least 1".to_string(),
        ));
    }

    let mut notes = FeedbackBatch::new();
    let mut page_offset = 0;

    loop {
        let request = PageRequest::new(page_limit, page_offset, days);
        let batch = source.fetch_page(&request).await?;
        let fetched = batch.len();
        notes.extend(batch);
        info!("Fetched {} notes (offset={})", fetched, page_offset);

        if fetched < page_limit {
            break;
        }
        page_offset += page_limit;
    }

    info!(
        "Total notes fetched for last {} days: {}",
        days,
        notes.len()
    );
    Ok(notes)
}
