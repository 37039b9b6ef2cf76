//! Diagram commands: attach and remove a question's image

use crate::{Command, Result};
use exam_model::{Document, ImageRef, QuestionPath};
use serde::{Deserialize, Serialize};

/// Attach a diagram to a question, replacing any previous one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachImage {
    pub path: QuestionPath,
    /// Reference handed back by file selection
    pub image: ImageRef,
}

impl AttachImage {
    pub fn new(path: QuestionPath, image: impl Into<ImageRef>) -> Self {
        Self {
            path,
            image: image.into(),
        }
    }
}

impl Command for AttachImage {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.question_mut(self.path)?.image = Some(self.image.clone());
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Attach Image"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove a question's diagram. The reference itself is released at session teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveImage {
    pub path: QuestionPath,
}

impl RemoveImage {
    pub fn new(path: QuestionPath) -> Self {
        Self { path }
    }
}

impl Command for RemoveImage {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.question_mut(self.path)?.image = None;
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Remove Image"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::{Question, Section};

    fn create_test_doc() -> Document {
        let mut section = Section::new("Section A");
        section.questions.push(Question::new("1"));
        section.questions.push(Question::new("2"));
        let mut doc = Document::default();
        doc.sections.push(section);
        doc
    }

    #[test]
    fn test_attach_and_remove_image() {
        let doc = create_test_doc();
        let path = QuestionPath::new(0, 1);

        let doc = AttachImage::new(path, "session-image://abc/circuit.png").apply(&doc).unwrap();
        assert_eq!(
            doc.question(path).unwrap().image,
            Some(ImageRef::new("session-image://abc/circuit.png"))
        );
        assert!(doc.sections[0].questions[0].image.is_none());

        let doc = RemoveImage::new(path).apply(&doc).unwrap();
        assert!(doc.question(path).unwrap().image.is_none());
    }

    #[test]
    fn test_attach_replaces_existing() {
        let doc = create_test_doc();
        let path = QuestionPath::new(0, 0);
        let doc = AttachImage::new(path, "first").apply(&doc).unwrap();
        let doc = AttachImage::new(path, "second").apply(&doc).unwrap();
        assert_eq!(doc.question(path).unwrap().image.as_ref().unwrap().as_str(), "second");
    }
}
