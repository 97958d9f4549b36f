//! Shared constants for sqlchat.

/// Number of sample rows collected per table for the schema description.
pub const SCHEMA_SAMPLE_ROWS: usize = 5;

/// Database file used when `DB_PATH` is not set.
pub const DEFAULT_DB_PATH: &str = "chinook.db";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default HTTP timeout for text-generation requests, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default number of retries for transient text-generation failures.
/// Zero keeps a failing turn a single attempt.
pub const DEFAULT_LLM_MAX_RETRIES: usize = 0;

/// Sampling temperature for SQL translation.
pub const SQL_TEMPERATURE: f32 = 0.0;

/// Sampling temperature for insight generation.
pub const INSIGHT_TEMPERATURE: f32 = 0.7;

/// Insight request used when the caller supplies none.
pub const DEFAULT_INSIGHT_REQUEST: &str = "Generate key business insights from this data";

/// Assistant message attached to a turn that produced rows.
pub const FOUND_RESULTS_MESSAGE: &str = "Here's what I found:";

/// Assistant message attached to a turn whose query returned no rows.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
