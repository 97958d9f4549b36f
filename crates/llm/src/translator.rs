use sqlchat_core::constants::SQL_TEMPERATURE;
use sqlchat_core::{strip_code_fence, SchemaDescription};

use crate::client::LlmClient;
use crate::error::LlmError;

pub(crate) const SQL_SYSTEM_PROMPT: &str = "You are an expert SQL developer. Generate only SQL queries without any explanation or additional text.";

impl LlmClient {
    /// Translate a natural-language question into one SQL statement.
    ///
    /// The reply is returned as-is apart from trimming and removing a code
    /// fence around the whole answer. It is not parsed or checked: a
    /// destructive or malformed statement comes back unchanged.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn translate(
        &self,
        schema: &SchemaDescription,
        question: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_sql_prompt(schema, question);
        tracing::debug!(question, "translating question to SQL");
        let reply = self.complete(SQL_SYSTEM_PROMPT, prompt, SQL_TEMPERATURE).await?;
        let sql = strip_code_fence(&reply).to_owned();
        tracing::info!(sql = %sql, "generated SQL");
        Ok(sql)
    }
}

pub(crate) fn build_sql_prompt(schema: &SchemaDescription, question: &str) -> String {
    format!(
        r#"Given the following database schema and sample data:
{schema}

Convert this natural language query to SQL: "{question}"
Return ONLY the SQL query, nothing else. The query should be executable on a SQLite database."#
    )
}
