//! Question commands: add, delete, field updates, and context passages

use crate::{Command, Result};
use exam_model::{next_question_number, Document, Question, QuestionPath, NEW_CONTEXT_TEXT};
use serde::{Deserialize, Serialize};

/// Scalar text fields of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionField {
    Number,
    Text,
    Marks,
}

/// Append a plain question to a section
///
/// The number follows the last question's leading integer ("7" → "8"),
/// or is "1" when the section is empty or that number is not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddQuestion {
    pub section: usize,
}

impl AddQuestion {
    pub fn new(section: usize) -> Self {
        Self { section }
    }
}

impl Command for AddQuestion {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let section = new_doc.section_mut(self.section)?;
        let number = next_question_number(&section.questions);
        section.questions.push(Question::new(number));
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Add Question"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Append an "OR" question: two placeholder choices, options placed right after the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAlternativeQuestion {
    pub section: usize,
}

impl AddAlternativeQuestion {
    pub fn new(section: usize) -> Self {
        Self { section }
    }
}

impl Command for AddAlternativeQuestion {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let section = new_doc.section_mut(self.section)?;
        let number = next_question_number(&section.questions);
        section.questions.push(Question::alternative(number));
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Add OR Question"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove a question. Sibling numbers are left as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteQuestion {
    pub path: QuestionPath,
}

impl DeleteQuestion {
    pub fn new(path: QuestionPath) -> Self {
        Self { path }
    }
}

impl Command for DeleteQuestion {
    fn apply(&self, document: &Document) -> Result<Document> {
        document.question(self.path)?;

        let mut new_doc = document.clone();
        new_doc
            .section_mut(self.path.section)?
            .questions
            .remove(self.path.question);
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Delete Question"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace the number, text, or marks of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuestionField {
    pub path: QuestionPath,
    pub field: QuestionField,
    pub value: String,
}

impl SetQuestionField {
    pub fn new(path: QuestionPath, field: QuestionField, value: impl Into<String>) -> Self {
        Self {
            path,
            field,
            value: value.into(),
        }
    }
}

impl Command for SetQuestionField {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let question = new_doc.question_mut(self.path)?;
        let value = self.value.clone();
        match self.field {
            QuestionField::Number => question.number = value,
            QuestionField::Text => question.text = value,
            QuestionField::Marks => question.marks = value,
        }
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Question Field"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Give a question a placeholder context passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContext {
    pub path: QuestionPath,
}

impl AddContext {
    pub fn new(path: QuestionPath) -> Self {
        Self { path }
    }
}

impl Command for AddContext {
    fn apply(&self, document: &Document) -> Result<Document> {
        SetContext::new(self.path, NEW_CONTEXT_TEXT).apply(document)
    }

    fn display_name(&self) -> &str {
        "Add Context"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace a question's context passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetContext {
    pub path: QuestionPath,
    pub context: String,
}

impl SetContext {
    pub fn new(path: QuestionPath, context: impl Into<String>) -> Self {
        Self {
            path,
            context: context.into(),
        }
    }
}

impl Command for SetContext {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.question_mut(self.path)?.context = Some(self.context.clone());
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Context"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Drop a question's context passage. Its slot in the element order stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveContext {
    pub path: QuestionPath,
}

impl RemoveContext {
    pub fn new(path: QuestionPath) -> Self {
        Self { path }
    }
}

impl Command for RemoveContext {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.question_mut(self.path)?.context = None;
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Remove Context"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
