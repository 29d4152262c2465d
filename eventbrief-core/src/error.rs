//! Error types for eventbrief.

use thiserror::Error;

/// Errors that can occur at the fallible edges of eventbrief.
///
/// The extraction and filtering pipeline itself never fails on text input;
/// these cover reference-date parsing, invite construction and configuration.
#[derive(Error, Debug)]
pub enum EventbriefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid invite: {0}")]
    InvalidInvite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventbrief operations.
pub type EventbriefResult<T> = Result<T, EventbriefError>;
