//! Runtime configuration: where the database lives and how much to log.
//!
//! Resolved from command-line flags, then environment variables, then
//! defaults. User preferences (dark mode) are not configuration; they live in
//! the store.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::db::Database;

// Environment variable names
pub const ENV_DB_PATH: &str = "CONTACTBOOK_DB";
pub const ENV_LOG: &str = "CONTACTBOOK_LOG";
const ENV_RUST_LOG: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "contactbook=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Resolve from flags and the process environment.
    pub fn resolve(db_flag: Option<PathBuf>, verbose: bool) -> Result<Self> {
        Self::resolve_with(db_flag, verbose, |name| env::var(name).ok())
    }

    fn resolve_with(
        db_flag: Option<PathBuf>,
        verbose: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_path = match db_flag {
            Some(path) => path,
            None => match non_empty(ENV_DB_PATH) {
                Some(path) => PathBuf::from(path),
                None => Database::default_path()?,
            },
        };

        let log_filter = if verbose {
            VERBOSE_LOG_FILTER.to_string()
        } else {
            non_empty(ENV_LOG)
                .or_else(|| non_empty(ENV_RUST_LOG))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        Ok(Self { db_path, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_flag_beats_env() {
        let cfg = Config::resolve_with(
            Some(PathBuf::from("/tmp/flag.db")),
            false,
            env_of(&[(ENV_DB_PATH, "/tmp/env.db")]),
        )
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_env_db_path() {
        let cfg = Config::resolve_with(None, false, env_of(&[(ENV_DB_PATH, "/tmp/env.db")])).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/env.db"));
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_precedence() {
        let both = env_of(&[(ENV_LOG, "info"), (ENV_RUST_LOG, "trace"), (ENV_DB_PATH, "/x.db")]);
        assert_eq!(Config::resolve_with(None, false, &both).unwrap().log_filter, "info");
        assert_eq!(Config::resolve_with(None, true, &both).unwrap().log_filter, VERBOSE_LOG_FILTER);

        let rust_only = env_of(&[(ENV_RUST_LOG, "trace"), (ENV_DB_PATH, "/x.db")]);
        assert_eq!(Config::resolve_with(None, false, rust_only).unwrap().log_filter, "trace");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let cfg = Config::resolve_with(
            Some(PathBuf::from("/x.db")),
            false,
            env_of(&[(ENV_LOG, "  ")]),
        )
        .unwrap();
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }
}
