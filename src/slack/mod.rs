//! All Slack-specific functionality

pub mod blocks;
pub mod client;

// Re-export main types for convenience
pub use blocks::{DEFAULT_MAX_CHUNK_LEN, section_blocks, split_text_for_blocks};
pub use client::SlackClient;
