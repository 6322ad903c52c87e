use crate::core::models::FeedbackNote;

/// Renders the analysis prompt for a batch of notes.
///
/// Each note becomes one `- ` prefixed line under an introduction stating how
/// many notes are included and over which window.
#[must_use]
pub fn build_analysis_prompt(notes: &[FeedbackNote], days: u32) -> String {
    let prompt_intro = format!(
        "You are a product manager assistant analyzing {} pieces of product feedback from the last {}. \
         Identify key themes, recurring problems, user emotions, and prioritized recommendations for product improvements.\n\n\
         Feedback summary list:\n",
        notes.len(),
        describe_window(days)
    );

    let summaries = notes
        .iter()
        .map(|note| format!("- {}", note.display_text()))
        .collect::<Vec<_>>()
        .join("\n");

    prompt_intro + &summaries
}

#[must_use]
pub fn describe_window(days: u32) -> String {
    match days {
        1 => "day".to_string(),
        14 => "two weeks".to_string(),
        n => format!("{n} days"),
    }
}
