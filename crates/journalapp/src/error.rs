use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// The backing store refused a write (quota exceeded, read-only medium).
    /// Data handed to the store was NOT persisted.
    #[error("Write to '{key}' rejected: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Hashing error: {0}")]
    Hash(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;
