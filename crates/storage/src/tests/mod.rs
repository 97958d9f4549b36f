//! Test utilities and module declarations for storage tests.

mod query_tests;

use crate::Database;
use rusqlite::{params, Connection};
use sqlchat_core::ExecutionPolicy;
use tempfile::TempDir;

/// Creates an empty database file and returns a handle to it.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_empty_database(policy: ExecutionPolicy) -> (Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    Connection::open(&db_path).unwrap();
    (Database::new(db_path, policy), temp_dir)
}

/// Creates a database with a `tracks` table holding `count` rows
/// (`TrackId` 1..=count, `Name` "Track N", `Milliseconds` N * 1000).
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_tracks_database(count: i64, policy: ExecutionPolicy) -> (Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("tracks.db");
    let mut conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE tracks (TrackId INTEGER PRIMARY KEY, Name TEXT NOT NULL, Milliseconds INTEGER);",
    )
    .unwrap();
    let tx = conn.transaction().unwrap();
    for id in 1..=count {
        tx.execute(
            "INSERT INTO tracks (TrackId, Name, Milliseconds) VALUES (?1, ?2, ?3)",
            params![id, format!("Track {id}"), id * 1000],
        )
        .unwrap();
    }
    tx.commit().unwrap();
    drop(conn);
    (Database::new(db_path, policy), temp_dir)
}
