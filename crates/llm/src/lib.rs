//! LLM client for SQL translation and result insights.
//!
//! Talks to any OpenAI-compatible `/v1/chat/completions` endpoint.

mod ai_types;
mod client;
pub mod error;
mod insights;
mod translator;

#[cfg(test)]
mod retry_tests;

pub use ai_types::{ChatRequest, Message};
pub use client::LlmClient;
pub use error::LlmError;
pub use insights::analysis_request;
