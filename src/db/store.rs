use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::Database;
use crate::error::Result;

pub const KEY_CONTACTS: &str = "contacts";
pub const KEY_PERSONAL_INFO: &str = "personalInfo";
pub const KEY_SETTINGS: &str = "settings";

/// Write counter of a key. `0` means the key has never been written.
pub type Revision = i64;

/// A value together with the revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    pub value: Option<String>,
    pub revision: Revision,
}

/// Durable key to string mapping.
///
/// Each key is written independently; nothing is atomic across keys.
/// Every write bumps the key's revision, removals included.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_versioned(key)?.value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. No-op if it is absent.
    fn remove(&self, key: &str) -> Result<()>;

    fn get_versioned(&self, key: &str) -> Result<Versioned>;

    /// Write `value` only if `key` is still at `expected`.
    /// Returns false, without writing, when another write got there first.
    fn compare_and_set(&self, key: &str, expected: Revision, value: &str) -> Result<bool>;
}

impl Store for Database {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO kv_store (key, value, revision, updated_at)
               VALUES (?1, ?2, 1, CURRENT_TIMESTAMP)
               ON CONFLICT(key) DO UPDATE SET
                   value = excluded.value,
                   revision = kv_store.revision + 1,
                   updated_at = CURRENT_TIMESTAMP"#,
            params![key, value],
        )?;
        debug!(key, bytes = value.len(), "store set");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let changed = self.conn.execute(
            r#"UPDATE kv_store
               SET value = NULL, revision = revision + 1, updated_at = CURRENT_TIMESTAMP
               WHERE key = ?1 AND value IS NOT NULL"#,
            [key],
        )?;
        debug!(key, removed = changed > 0, "store remove");
        Ok(())
    }

    fn get_versioned(&self, key: &str) -> Result<Versioned> {
        let row = self
            .conn
            .query_row(
                "SELECT value, revision FROM kv_store WHERE key = ?1",
                [key],
                |row| Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Revision>(1)?)),
            )
            .optional()?;

        let versioned = match row {
            Some((value, revision)) => Versioned { value, revision },
            None => Versioned {
                value: None,
                revision: 0,
            },
        };
        debug!(key, revision = versioned.revision, present = versioned.value.is_some(), "store get");
        Ok(versioned)
    }

    fn compare_and_set(&self, key: &str, expected: Revision, value: &str) -> Result<bool> {
        let changed = if expected == 0 {
            self.conn.execute(
                r#"INSERT INTO kv_store (key, value, revision, updated_at)
                   VALUES (?1, ?2, 1, CURRENT_TIMESTAMP)
                   ON CONFLICT(key) DO NOTHING"#,
                params![key, value],
            )?
        } else {
            self.conn.execute(
                r#"UPDATE kv_store
                   SET value = ?2, revision = revision + 1, updated_at = CURRENT_TIMESTAMP
                   WHERE key = ?1 AND revision = ?3"#,
                params![key, value, expected],
            )?
        };
        debug!(key, expected, written = changed == 1, "store compare_and_set");
        Ok(changed == 1)
    }
}
