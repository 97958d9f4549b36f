use rusqlite::{params, Connection};
use sqlchat_core::constants::SCHEMA_SAMPLE_ROWS;
use sqlchat_core::{QueryResult, SchemaDescription, TableInfo};

use super::{quote_identifier, read_result, Database};
use crate::error::StorageError;

impl Database {
    /// Lists user tables (internal `sqlite_` tables excluded) with their columns.
    ///
    /// Tables come back in the engine's catalog order.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or the catalog query fails.
    pub fn list_tables(&self) -> Result<Vec<TableInfo>, StorageError> {
        let conn = self.connect()?;
        list_tables_on(&conn)
    }

    /// Builds the schema description: one section per table with its column
    /// list and up to five sample rows, sections separated by a blank line.
    ///
    /// Sample rows are whatever the engine scans first; no ordering is
    /// applied. A database without user tables yields an empty description.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or any table cannot be read.
    pub fn describe_schema(&self) -> Result<SchemaDescription, StorageError> {
        let conn = self.connect()?;
        let tables = list_tables_on(&conn)?;
        let mut sections = Vec::with_capacity(tables.len());
        for table in &tables {
            let sample = sample_rows(&conn, &table.name)?;
            sections.push(render_section(table, &sample));
        }
        tracing::info!(
            path = %self.path().display(),
            tables = tables.len(),
            "schema description built"
        );
        Ok(SchemaDescription::new(sections.join("\n\n")))
    }
}

fn list_tables_on(conn: &Connection) -> Result<Vec<TableInfo>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
    )?;
    let names =
        stmt.query_map([], |row| row.get::<_, String>(0))?.collect::<Result<Vec<_>, _>>()?;

    let mut columns_stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    names
        .into_iter()
        .map(|name| -> Result<TableInfo, StorageError> {
            let columns = columns_stmt
                .query_map(params![name], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TableInfo { name, columns })
        })
        .collect()
}

fn sample_rows(conn: &Connection, table: &str) -> Result<QueryResult, StorageError> {
    let sql = format!("SELECT * FROM {} LIMIT {SCHEMA_SAMPLE_ROWS}", quote_identifier(table));
    let mut stmt = conn.prepare(&sql)?;
    read_result(&mut stmt)
}

fn render_section(table: &TableInfo, sample: &QueryResult) -> String {
    let mut lines = Vec::with_capacity(sample.rows.len().saturating_add(3));
    lines.push(format!("Table: {}", table.name));
    lines.push(format!("Columns: {}", table.columns.join(", ")));
    lines.push("Sample data:".to_owned());
    for row in &sample.rows {
        lines.push(serde_json::Value::Object(row.clone()).to_string());
    }
    lines.join("\n")
}
