//! Process configuration.
//!
//! Settings are read once at startup from the environment (after the binary
//! has loaded an optional `.env` file) and then passed explicitly to every
//! component. Nothing below reads the environment after construction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DB_PATH, DEFAULT_LLM_MAX_RETRIES, DEFAULT_LLM_TIMEOUT_SECS,
    DEFAULT_MODEL,
};
use crate::env_config::{env_flag, env_parse_with_default, std_lookup};
use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DB_PATH_VAR: &str = "DB_PATH";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "SQLCHAT_MODEL";
pub const TIMEOUT_VAR: &str = "SQLCHAT_LLM_TIMEOUT_SECS";
pub const MAX_RETRIES_VAR: &str = "SQLCHAT_LLM_MAX_RETRIES";
pub const READ_ONLY_VAR: &str = "SQLCHAT_READ_ONLY";

/// Which statements the query executor lets through.
///
/// Generated SQL is untrusted text. `AllowAll` runs whatever the model
/// produced; `ReadOnly` opens the database read-only and refuses any
/// statement the engine reports as writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPolicy {
    #[default]
    AllowAll,
    ReadOnly,
}

impl ExecutionPolicy {
    #[must_use]
    pub const fn from_read_only(read_only: bool) -> Self {
        if read_only { Self::ReadOnly } else { Self::AllowAll }
    }

    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Session-wide settings.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub db_path: PathBuf,
    pub base_url: String,
    pub model: String,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: usize,
    pub policy: ExecutionPolicy,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"***")
            .field("db_path", &self.db_path)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("llm_max_retries", &self.llm_max_retries)
            .field("policy", &self.policy)
            .finish()
    }
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] when `OPENAI_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(std_lookup)
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] when the API key is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        Ok(Self {
            api_key,
            db_path: db_path_from_lookup(&lookup),
            base_url: lookup(BASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            llm_timeout_secs: env_parse_with_default(&lookup, TIMEOUT_VAR, DEFAULT_LLM_TIMEOUT_SECS),
            llm_max_retries: env_parse_with_default(
                &lookup,
                MAX_RETRIES_VAR,
                DEFAULT_LLM_MAX_RETRIES,
            ),
            policy: ExecutionPolicy::from_read_only(env_flag(&lookup, READ_ONLY_VAR, false)),
        })
    }

    #[must_use]
    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ExecutionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Resolves the database path without requiring a credential.
///
/// Commands that only touch the database (schema dump, raw query) use this
/// instead of [`Settings::from_env`].
#[must_use]
pub fn db_path_from_env() -> PathBuf {
    db_path_from_lookup(&std_lookup)
}

/// Resolves the execution policy without requiring a credential.
#[must_use]
pub fn policy_from_env() -> ExecutionPolicy {
    ExecutionPolicy::from_read_only(env_flag(&std_lookup, READ_ONLY_VAR, false))
}

fn db_path_from_lookup<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(DB_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Settings::from_lookup(lookup_from(&[(DB_PATH_VAR, "x.db")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(API_KEY_VAR)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let err = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.llm_timeout_secs, DEFAULT_LLM_TIMEOUT_SECS);
        assert_eq!(settings.llm_max_retries, 0);
        assert_eq!(settings.policy, ExecutionPolicy::AllowAll);
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            (DB_PATH_VAR, "/tmp/music.db"),
            (BASE_URL_VAR, "http://localhost:8080/"),
            (MODEL_VAR, "gpt-4o-mini"),
            (TIMEOUT_VAR, "5"),
            (MAX_RETRIES_VAR, "2"),
            (READ_ONLY_VAR, "true"),
        ]))
        .unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/tmp/music.db"));
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.llm_timeout_secs, 5);
        assert_eq!(settings.llm_max_retries, 2);
        assert!(settings.policy.is_read_only());
    }

    #[test]
    fn debug_redacts_api_key() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-secret")])).unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("***"));
    }
}
