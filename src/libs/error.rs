//! Application error taxonomy.
//!
//! Three failure classes cross the library boundary: a referenced record
//! that does not exist (or belongs to another user), invalid request input,
//! and I/O failures from the store or filesystem. The first two are raised
//! as distinct variants so callers can match on them; the last pass through
//! transparently and surface once at the command layer.

use crate::libs::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced entity does not exist or is owned by another user.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or inconsistent request input (dates, sort fields, ids).
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(msg: Message) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn validation(msg: Message) -> Self {
        AppError::Validation(msg.to_string())
    }
}
