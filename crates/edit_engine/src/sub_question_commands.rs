//! Sub-question commands

use crate::{Command, Result};
use exam_model::{sub_question_number, Document, QuestionPath, SubQuestion, SubQuestionPath};
use serde::{Deserialize, Serialize};

/// Scalar text fields of a sub-question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubQuestionField {
    Number,
    Text,
    Marks,
}

/// Append a sub-question lettered after the current count (0 → "a"), worth one mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSubQuestion {
    pub path: QuestionPath,
}

impl AddSubQuestion {
    pub fn new(path: QuestionPath) -> Self {
        Self { path }
    }
}

impl Command for AddSubQuestion {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let question = new_doc.question_mut(self.path)?;
        let number = sub_question_number(question.sub_questions.len());
        question.sub_questions.push(SubQuestion::new(number));
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Add Sub-Question"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove a sub-question. Remaining letters are not reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSubQuestion {
    pub path: SubQuestionPath,
}

impl DeleteSubQuestion {
    pub fn new(path: SubQuestionPath) -> Self {
        Self { path }
    }
}

impl Command for DeleteSubQuestion {
    fn apply(&self, document: &Document) -> Result<Document> {
        document.sub_question(self.path)?;

        let mut new_doc = document.clone();
        new_doc
            .question_mut(self.path.question)?
            .sub_questions
            .remove(self.path.sub_question);
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Delete Sub-Question"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace the number, text, or marks of a sub-question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSubQuestionField {
    pub path: SubQuestionPath,
    pub field: SubQuestionField,
    pub value: String,
}

impl SetSubQuestionField {
    pub fn new(path: SubQuestionPath, field: SubQuestionField, value: impl Into<String>) -> Self {
        Self {
            path,
            field,
            value: value.into(),
        }
    }
}

impl Command for SetSubQuestionField {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let sub = new_doc.sub_question_mut(self.path)?;
        let value = self.value.clone();
        match self.field {
            SubQuestionField::Number => sub.number = value,
            SubQuestionField::Text => sub.text = value,
            SubQuestionField::Marks => sub.marks = value,
        }
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Sub-Question Field"
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
        let mut question = Question::new("3");
        question.sub_questions.push(SubQuestion::new("a"));
        question.sub_questions.push(SubQuestion::new("b"));
        let mut section = Section::new("Section A");
        section.questions.push(question);
        section.questions.push(Question::new("4"));
        let mut doc = Document::default();
        doc.sections.push(section);
        doc
    }

    #[test]
    fn test_third_sub_question_is_c() {
        let doc = create_test_doc();
        let path = QuestionPath::new(0, 0);
        let new_doc = AddSubQuestion::new(path).apply(&doc).unwrap();

        let subs = &new_doc.question(path).unwrap().sub_questions;
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[2].number, "c");
        assert_eq!(subs[2].marks, "1");
        assert_eq!(subs[2].text, "New sub-question");
        assert!(subs[2].options.is_none());
    }

    #[test]
    fn test_first_sub_question_is_a() {
        let doc = create_test_doc();
        let path = QuestionPath::new(0, 1);
        let new_doc = AddSubQuestion::new(path).apply(&doc).unwrap();
        assert_eq!(new_doc.question(path).unwrap().sub_questions[0].number, "a");
    }

    #[test]
    fn test_letter_follows_count_not_last_letter() {
        let mut doc = create_test_doc();
        doc.sections[0].questions[0].sub_questions[1].number = "x".into();
        let path = QuestionPath::new(0, 0);
        let new_doc = AddSubQuestion::new(path).apply(&doc).unwrap();
        assert_eq!(new_doc.question(path).unwrap().sub_questions[2].number, "c");
    }

    #[test]
    fn test_delete_sub_question() {
        let doc = create_test_doc();
        let new_doc = DeleteSubQuestion::new(SubQuestionPath::new(0, 0, 0))
            .apply(&doc)
            .unwrap();

        let subs = &new_doc.sections[0].questions[0].sub_questions;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].number, "b");
        assert_eq!(new_doc.sections[0].questions[1], doc.sections[0].questions[1]);
    }

    #[test]
    fn test_delete_sub_question_out_of_range() {
        let doc = create_test_doc();
        assert!(DeleteSubQuestion::new(SubQuestionPath::new(0, 0, 2)).apply(&doc).is_err());
    }

    #[test]
    fn test_set_sub_question_marks() {
        let doc = create_test_doc();
        let path = SubQuestionPath::new(0, 0, 1);
        let new_doc = SetSubQuestionField::new(path, SubQuestionField::Marks, "2")
            .apply(&doc)
            .unwrap();

        assert_eq!(new_doc.sub_question(path).unwrap().marks, "2");
        assert_eq!(
            new_doc.sub_question(SubQuestionPath::new(0, 0, 0)).unwrap(),
            doc.sub_question(SubQuestionPath::new(0, 0, 0)).unwrap()
        );
    }
}
