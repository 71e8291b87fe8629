//! SQL schema for [`crate::SqliteStore`].

/// One row per key; values are stored as the same JSON text local storage holds.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS kv_entries (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#
}
