use tracing::info;

use crate::ai::build_analysis_prompt;
use crate::core::models::FeedbackNote;
use crate::core::ports::Summarizer;
use crate::errors::DigestError;

/// Builds the analysis prompt for `notes` and asks the model for themes.
///
/// # Errors
///
/// Propagates any summarizer failure unchanged; there is no retry or
/// fallback model.
pub async fn analyze_trends<L>(
    summarizer: &L,
    notes: &[FeedbackNote],
    days: u32,
) -> Result<String, DigestError>
where
    L: Summarizer + ?Sized,
{
    let prompt = build_analysis_prompt(notes, days);
    info!("Sending batch analysis prompt to the model...");
    let analysis = summarizer.complete(&prompt).await?;
    info!(
        "Received trend analysis ({} characters)",
        analysis.chars().count()
    );
    Ok(analysis)
}
