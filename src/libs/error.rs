//! Typed errors for the register core.
//!
//! Every roster, ledger, and persistence failure surfaces as one of these
//! variants. Components below the command layer never print or swallow
//! them; the commands translate them into user-facing messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    /// An add used an id that is already registered.
    #[error("student id `{0}` already exists")]
    DuplicateId(String),
    /// A required field was empty or a value was out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The referenced student is not in the roster.
    #[error("student `{0}` not found")]
    NotFound(String),
    /// The storage backend failed to read or write a blob.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, RegisterError>;

impl From<std::io::Error> for RegisterError {
    fn from(e: std::io::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for RegisterError {
    fn from(e: serde_json::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}
