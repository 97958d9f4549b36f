use rusqlite::Batch;
use sqlchat_core::{truncate, QueryResult};

use super::{read_result, Database};
use crate::error::StorageError;

const SQL_PREVIEW_LEN: usize = 200;

impl Database {
    /// Runs one SQL statement and returns its columns and rows.
    ///
    /// The statement is not inspected beyond what the engine reports. Under
    /// [`sqlchat_core::ExecutionPolicy::ReadOnly`] a statement the engine
    /// flags as writing is refused before it runs. Statements without a
    /// result set (DML, DDL) return no columns and no rows.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened, the text holds zero or
    /// several statements, the policy refuses it, or the engine fails it.
    pub fn execute(&self, sql: &str) -> Result<QueryResult, StorageError> {
        let conn = self.connect()?;
        let mut batch = Batch::new(&conn, sql);
        let mut stmt = batch.next()?.ok_or(StorageError::EmptyStatement)?;
        // Any statement text left in the tail counts, even if it cannot be
        // prepared yet (it may depend on the first statement).
        if !matches!(batch.next(), Ok(None)) {
            return Err(StorageError::MultipleStatements);
        }

        if self.policy().is_read_only() && !stmt.readonly() {
            tracing::warn!(sql = %truncate(sql, SQL_PREVIEW_LEN), "refused writing statement");
            return Err(StorageError::ReadOnlyViolation(truncate(sql, SQL_PREVIEW_LEN).to_owned()));
        }

        let result = read_result(&mut stmt)?;
        tracing::debug!(
            columns = result.columns.len(),
            rows = result.row_count(),
            "query executed"
        );
        Ok(result)
    }
}
