//! Questions and sub-questions

use crate::{ElementKind, ElementOrder, ImageRef};
use serde::{Deserialize, Serialize};

/// Text given to a freshly added question
pub const NEW_QUESTION_TEXT: &str = "New question";
/// Text given to a freshly added "OR" question
pub const ALTERNATIVE_QUESTION_TEXT: &str = "Answer any ONE of the following:";
/// Choices given to a freshly added "OR" question
pub const ALTERNATIVE_QUESTION_OPTIONS: [&str; 2] = [
    "(A) First choice question here...",
    "(B) Second choice question here...",
];
/// Text given to a freshly added sub-question
pub const NEW_SUB_QUESTION_TEXT: &str = "New sub-question";
/// Text given to a freshly added option
pub const NEW_OPTION_TEXT: &str = "New option";
/// Text given to a freshly added context passage
pub const NEW_CONTEXT_TEXT: &str = "Add context/passage here...";

/// A numbered exam question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Free-text number as printed ("1", "Q.3", "iv")
    pub number: String,
    pub text: String,
    pub marks: String,
    /// Passage, poem or extract printed with the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub sub_questions: Vec<SubQuestion>,
    /// Render order of the facets; `None` only for questions that arrived without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<ElementOrder>,
}

impl Question {
    /// Create a plain question with the canonical order
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: NEW_QUESTION_TEXT.to_string(),
            marks: "1".to_string(),
            context: None,
            image: None,
            options: Vec::new(),
            sub_questions: Vec::new(),
            order: Some(ElementOrder::canonical()),
        }
    }

    /// Create an "OR" question carrying two placeholder choices
    pub fn alternative(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: ALTERNATIVE_QUESTION_TEXT.to_string(),
            marks: "5".to_string(),
            context: None,
            image: None,
            options: ALTERNATIVE_QUESTION_OPTIONS.iter().map(|s| s.to_string()).collect(),
            sub_questions: Vec::new(),
            order: Some(ElementOrder::alternative()),
        }
    }

    /// The order used for rendering, falling back to canonical when none is stored
    pub fn effective_order(&self) -> ElementOrder {
        self.order.unwrap_or_default()
    }

    /// The context passage, if one is set and non-empty
    pub fn context_passage(&self) -> Option<&str> {
        self.context.as_deref().filter(|s| !s.is_empty())
    }

    /// The attached diagram, if one is set and non-empty
    pub fn diagram(&self) -> Option<&ImageRef> {
        self.image.as_ref().filter(|image| !image.is_empty())
    }

    /// Whether the facet of the given kind has something to show
    pub fn has_element(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Context => self.context_passage().is_some(),
            ElementKind::Text => true,
            ElementKind::Image => self.diagram().is_some(),
            ElementKind::Options => !self.options.is_empty(),
            ElementKind::SubQuestions => !self.sub_questions.is_empty(),
        }
    }
}

/// A lettered part of a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuestion {
    pub number: String,
    pub text: String,
    pub marks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl SubQuestion {
    /// Create a placeholder sub-question worth one mark
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: NEW_SUB_QUESTION_TEXT.to_string(),
            marks: "1".to_string(),
            options: None,
        }
    }

    /// The options, treating an absent list as empty
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}
