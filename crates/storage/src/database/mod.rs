//! `SQLite` access split by concern: schema introspection and query execution.
//!
//! All methods are synchronous; async callers wrap them in `spawn_blocking`.

mod query;
mod schema;

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Statement};
use sqlchat_core::{ExecutionPolicy, QueryResult, Row};

use crate::error::StorageError;

/// Handle to a database file.
///
/// Holds only the path and the execution policy. Each operation opens a
/// fresh connection, which is closed when the operation returns.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
    policy: ExecutionPolicy,
}

impl Database {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, policy: ExecutionPolicy) -> Self {
        Self { path: path.into(), policy }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    /// Opens a new connection. A missing file is an error, never created.
    pub(crate) fn connect(&self) -> Result<Connection, StorageError> {
        let access = if self.policy.is_read_only() {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        let flags = access | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Connection::open_with_flags(&self.path, flags)
            .map_err(|source| StorageError::Open { path: self.path.clone(), source })
    }
}

/// Steps a prepared statement to completion, collecting names and rows.
pub(crate) fn read_result(stmt: &mut Statement<'_>) -> Result<QueryResult, StorageError> {
    let columns = unique_column_names(&stmt.column_names());
    let mut rows = stmt.query([])?;
    let mut collected = Vec::new();
    while let Some(row) = rows.next()? {
        let mut mapped = Row::new();
        for (idx, name) in columns.iter().enumerate() {
            mapped.insert(name.clone(), value_to_json(row.get_ref(idx)?));
        }
        collected.push(mapped);
    }
    Ok(QueryResult::new(columns, collected))
}

/// Renames repeated column names (`a`, `a` -> `a`, `a_2`) so each row map
/// keeps one key per column.
pub(crate) fn unique_column_names(names: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    names
        .iter()
        .map(|name| {
            let mut candidate = (*name).to_owned();
            let mut suffix = 2_usize;
            while seen.contains(&candidate) {
                candidate = format!("{name}_{suffix}");
                suffix = suffix.saturating_add(1);
            }
            seen.insert(candidate.clone());
            candidate
        })
        .collect()
}

pub(crate) fn value_to_json(value: ValueRef<'_>) -> serde_json::Value {
    match value {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Integer(i) => serde_json::Value::from(i),
        ValueRef::Real(f) => {
            serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
        },
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => {
            let mut hex = String::with_capacity(bytes.len().saturating_mul(2).saturating_add(3));
            hex.push_str("x'");
            for b in bytes {
                _ = write!(hex, "{b:02x}");
            }
            hex.push('\'');
            serde_json::Value::String(hex)
        },
    }
}

/// Quotes an identifier for interpolation into SQL text.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
