// Entry point for the scheduled feedback digest run

use anyhow::Context;
use feedback_digest::ai::LlmClient;
use feedback_digest::core::config::AppConfig;
use feedback_digest::feedback::ProductboardClient;
use feedback_digest::slack::SlackClient;
use feedback_digest::worker::{RunOutcome, run_batch_analysis};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();
    feedback_digest::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let source = ProductboardClient::new(http.clone(), config.productboard_api_token.clone());
    let llm = LlmClient::new(
        http.clone(),
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.model_name().to_string(),
    );
    let slack = SlackClient::new(http, config.slack_bot_token.clone());

    let outcome = run_batch_analysis(&config, &source, &llm, &slack)
        .await
        .map_err(|e| {
            error!("Batch analysis failed: {}", e);
            e
        })
        .context("Batch analysis run failed")?;

    match outcome {
        RunOutcome::NoNotes => info!("Run finished without feedback to analyze"),
        RunOutcome::Posted { notes, chunks } => {
            info!("Run finished: {} notes analyzed, {} blocks posted", notes, chunks);
        }
        RunOutcome::NotificationFailed { notes, reason, .. } => {
            info!(
                "Run finished: {} notes analyzed, Slack delivery failed ({})",
                notes, reason
            );
        }
    }

    Ok(())
}
