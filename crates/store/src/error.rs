//! Error types for storage and ingestion

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures of the conversion call. Messages are surfaced to the user as-is.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Conversion service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Conversion service unreachable: {0}")]
    Transport(String),

    #[error("Malformed conversion payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("A paper is already loading")]
    Busy,
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
