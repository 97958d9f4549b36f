use serde::{Deserialize, Serialize};

/// One result row: column name to value, iterated in column order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Column names plus rows, exactly as the engine produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column names in positional order.
    pub columns: Vec<String>,
    /// Rows in result-set order; each has one key per entry of `columns`.
    pub rows: Vec<Row>,
}

impl QueryResult {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows rendered as a compact JSON array, for embedding in prompts.
    #[must_use]
    pub fn rows_json(&self) -> String {
        serde_json::Value::Array(
            self.rows.iter().cloned().map(serde_json::Value::Object).collect(),
        )
        .to_string()
    }
}

/// Name and column names of one user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<String>,
}

/// Text summary of the database used to ground every text-generation request.
///
/// Built once per session and never refreshed: if the database changes
/// afterwards the description goes stale until the session is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDescription(String);

impl SchemaDescription {
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SchemaDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
