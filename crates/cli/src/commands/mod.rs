pub(crate) mod ask;
pub(crate) mod chat;
pub(crate) mod insights;
pub(crate) mod query;
pub(crate) mod schema;
pub(crate) mod serve;

use std::path::PathBuf;

use anyhow::Result;
use sqlchat_core::config::{db_path_from_env, policy_from_env};
use sqlchat_core::{ExecutionPolicy, Settings};
use sqlchat_service::ChatSession;
use sqlchat_storage::Database;

/// Flags shared by every subcommand. Each one overrides its env variable.
pub(crate) struct GlobalArgs {
    pub db: Option<PathBuf>,
    pub model: Option<String>,
    pub read_only: bool,
}

impl GlobalArgs {
    /// Full settings, including the API key.
    pub(crate) fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::from_env()?;
        if let Some(db) = &self.db {
            settings = settings.with_db_path(db.clone());
        }
        if let Some(model) = &self.model {
            settings = settings.with_model(model.clone());
        }
        if self.read_only {
            settings = settings.with_policy(ExecutionPolicy::ReadOnly);
        }
        Ok(settings)
    }

    /// Database handle for commands that never call the model.
    pub(crate) fn database(&self) -> Database {
        let path = self.db.clone().unwrap_or_else(db_path_from_env);
        let policy = if self.read_only { ExecutionPolicy::ReadOnly } else { policy_from_env() };
        Database::new(path, policy)
    }

    pub(crate) async fn session(&self) -> Result<ChatSession> {
        let settings = self.settings()?;
        tracing::info!(
            db = %settings.db_path.display(),
            model = %settings.model,
            read_only = settings.policy.is_read_only(),
            "opening session"
        );
        Ok(ChatSession::open(&settings).await?)
    }
}
