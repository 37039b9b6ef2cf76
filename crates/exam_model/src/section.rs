//! Sections of an exam paper

use crate::{ModelError, Question, Result};
use serde::{Deserialize, Serialize};

/// Title given to a freshly added section
pub const NEW_SECTION_TITLE: &str = "NEW SECTION";

/// A titled, ordered group of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Section {
    /// Create an empty section with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Create the placeholder section appended by "add section"
    pub fn placeholder() -> Self {
        Self::new(NEW_SECTION_TITLE)
    }

    /// Get a question by index
    pub fn question(&self, index: usize) -> Result<&Question> {
        self.questions.get(index).ok_or(ModelError::QuestionOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Get a mutable question by index
    pub fn question_mut(&mut self, index: usize) -> Result<&mut Question> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or(ModelError::QuestionOutOfRange { index, len })
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::placeholder()
    }
}
