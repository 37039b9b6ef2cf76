//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Render path out of range: {0}")]
    Model(#[from] exam_model::ModelError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
