pub const SCHEMA_VERSION: i32 = 1;

/// Key-value table backing every logical key.
///
/// `value` is NULL once a key has been removed; the row stays so that
/// `revision` keeps counting and a stale writer can't mistake a re-created
/// key for the one it read.
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT,
    revision INTEGER NOT NULL DEFAULT 0,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;
