use chrono::{Duration, Utc};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::ports::{FeedbackSource, MessagePoster, Summarizer};
use crate::errors::DigestError;
use crate::feedback::fetch_feedback_notes;
use crate::worker::deliver::{DeliveryOutcome, post_analysis};
use crate::worker::summarize::analyze_trends;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was created in the lookback window; no analysis was requested.
    NoNotes,
    Posted {
        notes: usize,
        chunks: usize,
    },
    /// The analysis was produced but Slack rejected the post.
    NotificationFailed {
        notes: usize,
        chunks: usize,
        reason: String,
    },
}

/// Runs one fetch → summarize → post cycle.
///
/// # Errors
///
/// Returns an error if fetching notes or generating the analysis fails.
/// Slack delivery failures are logged and surface as
/// [`RunOutcome::NotificationFailed`] instead.
pub async fn run_batch_analysis<S, L, P>(
    config: &AppConfig,
    source: &S,
    summarizer: &L,
    poster: &P,
) -> Result<RunOutcome, DigestError>
where
    S: FeedbackSource + ?Sized,
    L: Summarizer + ?Sized,
    P: MessagePoster + ?Sized,
{
    let span = info_span!("batch_analysis", run_id = %Uuid::new_v4());
    run_once(config, source, summarizer, poster)
        .instrument(span)
        .await
}

async fn run_once<S, L, P>(
    config: &AppConfig,
    source: &S,
    summarizer: &L,
    poster: &P,
) -> Result<RunOutcome, DigestError>
where
    S: FeedbackSource + ?Sized,
    L: Summarizer + ?Sized,
    P: MessagePoster + ?Sized,
{
    let since = Duration::try_days(i64::from(config.lookback_days))
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| {
            DigestError::ConfigError(format!(
                "FEEDBACK_LOOKBACK_DAYS={} is out of range",
                config.lookback_days
            ))
        })?;
    info!(
        "Fetching feedback notes created since {}",
        since.to_rfc3339()
    );

    let notes = fetch_feedback_notes(source, config.lookback_days, config.page_limit).await?;
    if notes.is_empty() {
        warn!("No feedback notes found for analysis. Exiting.");
        return Ok(RunOutcome::NoNotes);
    }

    let analysis = analyze_trends(summarizer, &notes, config.lookback_days).await?;

    let outcome = match post_analysis(
        poster,
        &config.product_team_channel,
        &analysis,
        config.max_chunk_len,
    )
    .await
    {
        DeliveryOutcome::Posted { chunks } => RunOutcome::Posted {
            notes: notes.len(),
            chunks,
        },
        DeliveryOutcome::Failed { chunks, reason } => RunOutcome::NotificationFailed {
            notes: notes.len(),
            chunks,
            reason,
        },
    };

    Ok(outcome)
}
