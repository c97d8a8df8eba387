use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

mod contacts;
mod preferences;
mod profile;
mod schema;
mod store;

pub use contacts::ContactRepository;
pub use preferences::PreferencesRepository;
pub use profile::ProfileRepository;
pub use schema::SCHEMA_VERSION;
pub use store::{Revision, Store, Versioned, KEY_CONTACTS, KEY_PERSONAL_INFO, KEY_SETTINGS};

/// SQLite-backed key-value store.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open the database at `path`, creating it and its parent directories if needed.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        // A second terminal may hold the write lock briefly
        conn.busy_timeout(Duration::from_secs(5))?;

        let db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.migrate()?;
        info!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self { conn, path: None };
        db.migrate()?;
        Ok(db)
    }

    /// `<config dir>/contactbook/contactbook.db`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("contactbook").join("contactbook.db"))
    }

    /// Where the data lives, for display.
    pub fn path_display(&self) -> String {
        match self.path {
            Some(ref p) => p.display().to_string(),
            None => "(in memory)".to_string(),
        }
    }

    pub fn contacts(&self) -> ContactRepository<'_, Self> {
        ContactRepository::new(self)
    }

    pub fn profile(&self) -> ProfileRepository<'_, Self> {
        ProfileRepository::new(self)
    }

    pub fn preferences(&self) -> PreferencesRepository<'_, Self> {
        PreferencesRepository::new(self)
    }

    fn migrate(&self) -> Result<()> {
        let version = self.get_schema_version()?;

        if version == 0 {
            self.conn
                .execute_batch(&format!("BEGIN TRANSACTION; {} COMMIT;", schema::SCHEMA_V1))?;
            self.set_schema_version(SCHEMA_VERSION)?;
            debug!(version = SCHEMA_VERSION, "created schema");
        } else if version > SCHEMA_VERSION {
            anyhow::bail!(
                "Database schema v{} is newer than this build supports (v{})",
                version,
                SCHEMA_VERSION
            );
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<i32> {
        let result: Result<i32, _> =
            self.conn
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(rusqlite::Error::SqliteFailure(err, msg)) => {
                // "no such table" is reported as a generic SQLITE_ERROR
                if err.code == rusqlite::ErrorCode::Unknown
                    && msg.as_ref().is_some_and(|m| m.contains("no such table"))
                {
                    Ok(0)
                } else {
                    Err(rusqlite::Error::SqliteFailure(err, msg).into())
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_schema_version(&self, version: i32) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
            [version],
        )?;
        Ok(())
    }
}
