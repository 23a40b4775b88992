//! Shared assertion helpers for E2E tests

use serde_json::Value;
use sqlx::SqliteConnection;

/// Assert that no object anywhere in `value` carries a `kids` key
///
/// Resolved story threads own their children outright; a surviving raw
/// child-id list in the serialized output means assembly leaked wire state.
pub fn assert_no_kids_key(value: &Value) {
    match value {
        Value::Object(fields) => {
            assert!(
                !fields.contains_key("kids"),
                "serialized output carries a raw kids list: {value}"
            );
            for field in fields.values() {
                assert_no_kids_key(field);
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                assert_no_kids_key(entry);
            }
        }
        _ => {}
    }
}

/// Count the rows of `table` over an open connection
pub async fn count_rows(conn: &mut SqliteConnection, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(conn)
        .await
        .unwrap()
}
