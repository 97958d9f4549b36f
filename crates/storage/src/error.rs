//! Typed error enum for the storage layer.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error.
///
/// Engine failures (bad SQL, missing table or column, constraint
/// violation) are not classified further: the engine's own message is the
/// error text.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened.
    #[error("cannot open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Any error raised by the engine while preparing or running SQL.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The SQL text contained no statement.
    #[error("empty SQL statement")]
    EmptyStatement,

    /// The SQL text contained more than one statement.
    #[error("only one SQL statement can be executed at a time")]
    MultipleStatements,

    /// A writing statement was refused under the read-only policy.
    #[error("statement is not read-only: {0}")]
    ReadOnlyViolation(String),
}
