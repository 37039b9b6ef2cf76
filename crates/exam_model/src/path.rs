//! Index paths addressing nodes in a document
//!
//! Paths are positions, not identities: deleting a sibling shifts every
//! later path by one.

use serde::{Deserialize, Serialize};

/// Address of a question: section index and question index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionPath {
    pub section: usize,
    pub question: usize,
}

impl QuestionPath {
    pub fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }

    /// Path of one of this question's sub-questions
    pub fn sub_question(self, sub_question: usize) -> SubQuestionPath {
        SubQuestionPath {
            question: self,
            sub_question,
        }
    }
}

impl std::fmt::Display for QuestionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.section, self.question)
    }
}

/// Address of a sub-question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubQuestionPath {
    pub question: QuestionPath,
    pub sub_question: usize,
}

impl SubQuestionPath {
    pub fn new(section: usize, question: usize, sub_question: usize) -> Self {
        QuestionPath::new(section, question).sub_question(sub_question)
    }
}

impl std::fmt::Display for SubQuestionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.question, self.sub_question)
    }
}

/// The node that owns an option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum OptionOwner {
    Question(QuestionPath),
    SubQuestion(SubQuestionPath),
}

impl OptionOwner {
    /// The question this owner belongs to
    pub fn question_path(&self) -> QuestionPath {
        match self {
            OptionOwner::Question(path) => *path,
            OptionOwner::SubQuestion(path) => path.question,
        }
    }
}

impl From<QuestionPath> for OptionOwner {
    fn from(path: QuestionPath) -> Self {
        OptionOwner::Question(path)
    }
}

impl From<SubQuestionPath> for OptionOwner {
    fn from(path: SubQuestionPath) -> Self {
        OptionOwner::SubQuestion(path)
    }
}

/// Address of a single option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionPath {
    pub owner: OptionOwner,
    pub option: usize,
}

impl OptionPath {
    pub fn new(owner: impl Into<OptionOwner>, option: usize) -> Self {
        Self {
            owner: owner.into(),
            option,
        }
    }
}

/// Address of one facet of one question, as picked up or dropped on during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub path: QuestionPath,
    pub kind: crate::ElementKind,
}

impl ElementRef {
    pub fn new(path: QuestionPath, kind: crate::ElementKind) -> Self {
        Self { path, kind }
    }
}
