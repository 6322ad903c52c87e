//! Batch run: fetch, summarize, deliver

pub mod deliver;
pub mod handler;
pub mod summarize;

// Re-export the main entry point for convenience
pub use handler::{RunOutcome, run_batch_analysis};
