//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    /// The command addressed a node that does not exist. Commands issued by
    /// the editor never do this; it indicates a caller bug.
    #[error("Path out of range: {0}")]
    OutOfRange(#[from] exam_model::ModelError),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, EditError>;
