//! Feedback retrieval from Productboard

pub mod client;
pub mod fetcher;

pub use client::ProductboardClient;
pub use fetcher::fetch_feedback_notes;
