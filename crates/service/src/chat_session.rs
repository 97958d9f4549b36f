use sqlchat_core::constants::{DEFAULT_INSIGHT_REQUEST, FOUND_RESULTS_MESSAGE, NO_RESULTS_MESSAGE};
use sqlchat_core::{AssistantTurn, Conversation, QueryResult, SchemaDescription, Settings};
use sqlchat_llm::{analysis_request, LlmClient};
use sqlchat_storage::Database;

use crate::blocking::run_blocking;
use crate::error::ServiceError;

/// One user's conversation with one database.
///
/// Holds everything a turn needs. The schema description is captured when
/// the session is created and not refreshed afterwards. Turns take
/// `&mut self`, so one question is fully answered before the next starts.
#[derive(Debug)]
pub struct ChatSession {
    db: Database,
    llm: LlmClient,
    schema: SchemaDescription,
    conversation: Conversation,
}

impl ChatSession {
    /// Builds a session from settings and describes the database.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built or the database
    /// cannot be opened and described.
    pub async fn open(settings: &Settings) -> Result<Self, ServiceError> {
        let db = Database::new(settings.db_path.clone(), settings.policy);
        let llm = LlmClient::from_settings(settings)?;
        Self::with_parts(db, llm).await
    }

    /// Builds a session from already-constructed parts.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened and described.
    pub async fn with_parts(db: Database, llm: LlmClient) -> Result<Self, ServiceError> {
        let introspect = db.clone();
        let schema = run_blocking(move || introspect.describe_schema()).await??;
        if schema.is_empty() {
            tracing::warn!(path = %db.path().display(), "database has no user tables");
        }
        Ok(Self { db, llm, schema, conversation: Conversation::new() })
    }

    #[must_use]
    pub const fn schema(&self) -> &SchemaDescription {
        &self.schema
    }

    #[must_use]
    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Answers one question and records the exchange.
    ///
    /// The question is recorded as a user turn first. On success an
    /// assistant turn carrying the SQL, rows and (for non-empty results)
    /// insights is appended and returned. Insights are not requested when
    /// the query returns no rows. On any failure nothing beyond the user
    /// turn is recorded and the error is returned.
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidInput`] for a blank question (nothing
    /// is recorded), [`ServiceError::Llm`] when translation or insight
    /// generation fails, and [`ServiceError::Execution`] when the generated
    /// SQL fails to run.
    pub async fn ask(&mut self, question: &str) -> Result<AssistantTurn, ServiceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ServiceError::InvalidInput("question must not be empty".to_owned()));
        }

        self.conversation.push_user(question);
        let turn_no = self.conversation.len();
        tracing::info!(turn = turn_no, question, "turn started");

        match self.answer(question).await {
            Ok(turn) => {
                tracing::info!(
                    turn = turn_no,
                    rows = turn.results.as_ref().map_or(0, QueryResult::row_count),
                    "turn completed"
                );
                self.conversation.push_assistant(turn.clone());
                Ok(turn)
            },
            Err(err) => {
                tracing::warn!(turn = turn_no, error = %err, "turn aborted");
                Err(err)
            },
        }
    }

    async fn answer(&self, question: &str) -> Result<AssistantTurn, ServiceError> {
        let sql = self.llm.translate(&self.schema, question).await?;
        let results = self.execute(&sql).await?;

        if results.is_empty() {
            return Ok(AssistantTurn::new(NO_RESULTS_MESSAGE).with_sql(sql).with_results(results));
        }

        let request = analysis_request(question, &results);
        let insights = self.llm.generate_insights(&self.schema, &request).await?;
        Ok(AssistantTurn::new(FOUND_RESULTS_MESSAGE)
            .with_sql(sql)
            .with_results(results)
            .with_insights(insights))
    }

    /// Runs SQL against the session's database without touching the history.
    ///
    /// # Errors
    /// Returns [`ServiceError::Execution`] if the engine or the execution
    /// policy rejects the statement.
    pub async fn execute(&self, sql: &str) -> Result<QueryResult, ServiceError> {
        let db = self.db.clone();
        let owned_sql = sql.to_owned();
        run_blocking(move || db.execute(&owned_sql))
            .await?
            .map_err(|source| ServiceError::Execution { sql: sql.to_owned(), source })
    }

    /// Generates insights for a free-form request without touching the history.
    ///
    /// Uses the default business-insight request when `request` is `None`.
    ///
    /// # Errors
    /// Returns [`ServiceError::Llm`] if the API call fails.
    pub async fn insights(&self, request: Option<&str>) -> Result<String, ServiceError> {
        let request =
            request.map(str::trim).filter(|r| !r.is_empty()).unwrap_or(DEFAULT_INSIGHT_REQUEST);
        Ok(self.llm.generate_insights(&self.schema, request).await?)
    }
}
