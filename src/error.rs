use thiserror::Error;

/// Errors raised by the store, the repositories and the section engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying database could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A stored value does not match the expected JSON shape.
    #[error("stored `{key}` is malformed: {reason}")]
    Parse { key: String, reason: String },

    /// A record is missing a required field or breaks a collection invariant.
    #[error("{0}")]
    Validation(String),

    #[error("no contact with id {0}")]
    NotFound(String),

    /// Another writer kept changing the key while we tried to save.
    #[error("`{0}` changed while saving, try again")]
    Conflict(String),
}

impl Error {
    pub(crate) fn parse(key: &str, reason: impl ToString) -> Self {
        Self::Parse {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Failures the user can't fix by changing their input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
