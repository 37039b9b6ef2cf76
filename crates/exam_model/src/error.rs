//! Error types for exam model operations

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Section index out of range: {index} (sections: {len})")]
    SectionOutOfRange { index: usize, len: usize },

    #[error("Question index out of range: {index} (questions: {len})")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("Sub-question index out of range: {index} (sub-questions: {len})")]
    SubQuestionOutOfRange { index: usize, len: usize },

    #[error("Option index out of range: {index} (options: {len})")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("Invalid element order: {0}")]
    InvalidOrder(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
