//! Feedback digest - posts an LLM trend analysis of recent Productboard feedback to Slack.
//!
//! One run pulls every note created in the lookback window, asks `OpenAI` for
//! recurring themes, and posts the answer to the product team's channel:
//!
//! 1. `feedback` pages through the Productboard notes API
//! 2. `ai` renders the prompt and calls the chat-completion model
//! 3. `slack` splits the analysis into section blocks and posts them
//! 4. `worker` wires the steps together for a single run
//!
//! # Example
//!
//! ```no_run
//! use feedback_digest::ai::LlmClient;
//! use feedback_digest::core::config::AppConfig;
//! use feedback_digest::feedback::ProductboardClient;
//! use feedback_digest::slack::SlackClient;
//! use feedback_digest::worker::{RunOutcome, run_batch_analysis};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     feedback_digest::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let http = reqwest::Client::new();
//!     let source = ProductboardClient::new(http.clone(), config.productboard_api_token.clone());
//!     let llm = LlmClient::new(
//!         http.clone(),
//!         config.openai_api_key.clone(),
//!         config.openai_org_id.clone(),
//!         config.model_name().to_string(),
//!     );
//!     let slack = SlackClient::new(http, config.slack_bot_token.clone());
//!
//!     match run_batch_analysis(&config, &source, &llm, &slack).await? {
//!         RunOutcome::NoNotes => println!("No feedback to analyze"),
//!         RunOutcome::Posted { notes, chunks } => println!("Posted {chunks} blocks for {notes} notes"),
//!         RunOutcome::NotificationFailed { reason, .. } => println!("Slack post failed: {reason}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod core;
pub mod errors;
pub mod feedback;
pub mod slack;
pub mod worker;

pub use errors::DigestError;

/// Configure structured logging with JSON output.
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. Calling
/// this more than once is harmless; only the first call installs a
/// subscriber.
///
/// # Example
///
/// ```
/// feedback_digest::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
