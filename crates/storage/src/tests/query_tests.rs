use super::{create_empty_database, create_tracks_database};
use crate::database::unique_column_names;
use crate::StorageError;
use rusqlite::Connection;
use serde_json::json;
use sqlchat_core::ExecutionPolicy;

#[test]
fn test_count_query_returns_single_value() {
    let (db, _temp_dir) = create_tracks_database(100, ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT COUNT(*) AS total FROM tracks").unwrap();
    assert_eq!(result.columns, ["total"]);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0]["total"], json!(100));
}

#[test]
fn test_row_keys_match_columns() {
    let (db, _temp_dir) = create_tracks_database(10, ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT Name, TrackId, Milliseconds FROM tracks").unwrap();
    assert_eq!(result.columns, ["Name", "TrackId", "Milliseconds"]);
    for row in &result.rows {
        assert_eq!(row.len(), result.columns.len());
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, result.columns.iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_row_order_follows_result_set() {
    let (db, _temp_dir) = create_tracks_database(5, ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT TrackId FROM tracks ORDER BY TrackId DESC").unwrap();
    let ids: Vec<i64> = result.rows.iter().map(|r| r["TrackId"].as_i64().unwrap()).collect();
    assert_eq!(ids, [5, 4, 3, 2, 1]);
}

#[test]
fn test_duplicate_column_names_are_disambiguated() {
    let (db, _temp_dir) = create_empty_database(ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT 1 AS a, 2 AS a, 3 AS a").unwrap();
    assert_eq!(result.columns, ["a", "a_2", "a_3"]);
    assert_eq!(result.rows[0].len(), 3);
    assert_eq!(result.rows[0]["a_2"], json!(2));
}

#[test]
fn test_unique_column_names_avoids_existing_suffix() {
    assert_eq!(unique_column_names(&["a", "a_2", "a"]), ["a", "a_2", "a_3"]);
}

#[test]
fn test_value_types_are_mapped() {
    let (db, _temp_dir) = create_empty_database(ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT NULL AS n, 42 AS i, 1.5 AS r, 'txt' AS t, x'0aff' AS b").unwrap();
    let row = &result.rows[0];
    assert_eq!(row["n"], json!(null));
    assert_eq!(row["i"], json!(42));
    assert_eq!(row["r"], json!(1.5));
    assert_eq!(row["t"], json!("txt"));
    assert_eq!(row["b"], json!("x'0aff'"));
}

#[test]
fn test_missing_table_on_empty_database_fails() {
    let (db, _temp_dir) = create_empty_database(ExecutionPolicy::AllowAll);
    let err = db.execute("SELECT * FROM tracks").unwrap_err();
    assert!(matches!(err, StorageError::Sqlite(_)));
    assert!(err.to_string().contains("no such table"));
}

#[test]
fn test_syntax_error_surfaces_engine_message() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::AllowAll);
    let err = db.execute("SELEKT * FROM tracks").unwrap_err();
    assert!(matches!(err, StorageError::Sqlite(_)));
    assert!(err.to_string().contains("syntax error"));
}

#[test]
fn test_empty_statement_rejected() {
    let (db, _temp_dir) = create_empty_database(ExecutionPolicy::AllowAll);
    assert!(matches!(db.execute("   ").unwrap_err(), StorageError::EmptyStatement));
}

#[test]
fn test_multiple_statements_rejected() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::AllowAll);
    let err = db.execute("SELECT 1; DELETE FROM tracks").unwrap_err();
    assert!(matches!(err, StorageError::MultipleStatements));

    let remaining = db.execute("SELECT COUNT(*) AS c FROM tracks").unwrap();
    assert_eq!(remaining.rows[0]["c"], json!(3));
}

#[test]
fn test_dependent_second_statement_rejected() {
    let (db, _temp_dir) = create_empty_database(ExecutionPolicy::AllowAll);
    let err = db.execute("CREATE TABLE x(a); SELECT * FROM x").unwrap_err();
    assert!(matches!(err, StorageError::MultipleStatements));
    assert!(db.list_tables().unwrap().is_empty());
}

#[test]
fn test_trailing_semicolon_is_single_statement() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::AllowAll);
    let result = db.execute("SELECT COUNT(*) AS c FROM tracks;\n").unwrap();
    assert_eq!(result.rows[0]["c"], json!(3));
}

#[test]
fn test_write_statement_runs_under_allow_all() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::AllowAll);
    let result = db.execute("DELETE FROM tracks WHERE TrackId = 1").unwrap();
    assert!(result.columns.is_empty());
    assert!(result.is_empty());

    let remaining = db.execute("SELECT COUNT(*) AS c FROM tracks").unwrap();
    assert_eq!(remaining.rows[0]["c"], json!(2));
}

#[test]
fn test_write_statement_refused_under_read_only() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::ReadOnly);
    let err = db.execute("DROP TABLE tracks").unwrap_err();
    assert!(matches!(err, StorageError::ReadOnlyViolation(_)));

    let conn = Connection::open(db.path()).unwrap();
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |r| r.get(0)).unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_select_allowed_under_read_only() {
    let (db, _temp_dir) = create_tracks_database(3, ExecutionPolicy::ReadOnly);
    let result = db.execute("SELECT Name FROM tracks WHERE TrackId = 2").unwrap();
    assert_eq!(result.rows[0]["Name"], json!("Track 2"));
}

#[test]
fn test_each_call_sees_latest_data() {
    let (db, _temp_dir) = create_tracks_database(1, ExecutionPolicy::AllowAll);
    db.execute("INSERT INTO tracks (Name) VALUES ('Late Addition')").unwrap();
    let result = db.execute("SELECT Name FROM tracks ORDER BY TrackId").unwrap();
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[1]["Name"], json!("Late Addition"));
}
