use sqlchat_core::constants::INSIGHT_TEMPERATURE;
use sqlchat_core::{QueryResult, SchemaDescription};

use crate::client::LlmClient;
use crate::error::LlmError;

pub(crate) const INSIGHT_SYSTEM_PROMPT: &str = "You are a data analyst expert. Provide clear, actionable insights based on the data. Use specific numbers and patterns where possible.";

/// Insight request that carries a question's result rows inline.
#[must_use]
pub fn analysis_request(question: &str, results: &QueryResult) -> String {
    format!("Analyze these query results for '{question}': {}", results.rows_json())
}

impl LlmClient {
    /// Ask for a narrative analysis of `request` grounded in the schema.
    ///
    /// `request` may embed result rows (see [`analysis_request`]). The reply
    /// is not checked against any data.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn generate_insights(
        &self,
        schema: &SchemaDescription,
        request: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_insights_prompt(schema, request);
        let insights = self.complete(INSIGHT_SYSTEM_PROMPT, prompt, INSIGHT_TEMPERATURE).await?;
        tracing::info!(chars = insights.len(), "generated insights");
        Ok(insights)
    }
}

pub(crate) fn build_insights_prompt(schema: &SchemaDescription, request: &str) -> String {
    format!(
        r#"Given the following database schema and sample data:
{schema}

Please analyze this and provide insights for the following request: "{request}"
Focus on specific, data-driven insights that can provide business value."#
    )
}
