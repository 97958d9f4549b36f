use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::QueryResult;

/// A question typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTurn {
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The assistant's answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantTurn {
    /// Status line shown above the details.
    pub content: String,
    /// SQL produced by the translator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    /// Rows returned by the executor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<QueryResult>,
    /// Narrative produced by the insight generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AssistantTurn {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sql: None,
            results: None,
            insights: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_sql(mut self, sql: String) -> Self {
        self.sql = Some(sql);
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: QueryResult) -> Self {
        self.results = Some(results);
        self
    }

    #[must_use]
    pub fn with_insights(mut self, insights: String) -> Self {
        self.insights = Some(insights);
        self
    }
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Turn {
    User(UserTurn),
    Assistant(AssistantTurn),
}

impl Turn {
    #[must_use]
    pub const fn role(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Assistant(_) => "assistant",
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::User(t) => &t.content,
            Self::Assistant(t) => &t.content,
        }
    }

    #[must_use]
    pub const fn as_assistant(&self) -> Option<&AssistantTurn> {
        match self {
            Self::Assistant(t) => Some(t),
            Self::User(_) => None,
        }
    }
}

/// Append-only, chronologically ordered conversation history.
///
/// Turns are never edited or removed once pushed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::User(UserTurn { content: content.into(), created_at: Utc::now() }));
    }

    pub fn push_assistant(&mut self, turn: AssistantTurn) {
        self.turns.push(Turn::Assistant(turn));
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
