//! Option commands for question-level and sub-question-level choices

use crate::{Command, Result};
use exam_model::{Document, ModelError, OptionOwner, OptionPath, NEW_OPTION_TEXT};
use serde::{Deserialize, Serialize};

/// Run `f` against the option list of `owner` inside `document`.
///
/// A sub-question without an option list gets an empty one first when
/// `create` is set; otherwise it is treated as empty.
fn with_options_mut<T>(
    document: &mut Document,
    owner: OptionOwner,
    create: bool,
    f: impl FnOnce(&mut Vec<String>) -> Result<T>,
) -> Result<T> {
    match owner {
        OptionOwner::Question(path) => f(&mut document.question_mut(path)?.options),
        OptionOwner::SubQuestion(path) => {
            let sub = document.sub_question_mut(path)?;
            if create {
                return f(sub.options.get_or_insert_with(Vec::new));
            }
            match sub.options.as_mut() {
                Some(options) => f(options),
                None => f(&mut Vec::new()),
            }
        }
    }
}

fn check_option_index(options: &[String], index: usize) -> Result<()> {
    if index < options.len() {
        Ok(())
    } else {
        Err(ModelError::OptionOutOfRange {
            index,
            len: options.len(),
        }
        .into())
    }
}

/// Append a placeholder option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOption {
    pub owner: OptionOwner,
}

impl AddOption {
    pub fn new(owner: impl Into<OptionOwner>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

impl Command for AddOption {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        with_options_mut(&mut new_doc, self.owner, true, |options| {
            options.push(NEW_OPTION_TEXT.to_string());
            Ok(())
        })?;
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Add Option"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove an option; later options move up by one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOption {
    pub path: OptionPath,
}

impl DeleteOption {
    pub fn new(path: OptionPath) -> Self {
        Self { path }
    }
}

impl Command for DeleteOption {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let index = self.path.option;
        with_options_mut(&mut new_doc, self.path.owner, false, |options| {
            check_option_index(options, index)?;
            options.remove(index);
            Ok(())
        })?;
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Delete Option"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace the text of an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOption {
    pub path: OptionPath,
    pub value: String,
}

impl SetOption {
    pub fn new(path: OptionPath, value: impl Into<String>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

impl Command for SetOption {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let index = self.path.option;
        with_options_mut(&mut new_doc, self.path.owner, false, |options| {
            check_option_index(options, index)?;
            options[index] = self.value.clone();
            Ok(())
        })?;
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Option"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditError;
    use exam_model::{Question, QuestionPath, Section, SubQuestion, SubQuestionPath};
    use proptest::prelude::*;

    fn doc_with_options(options: Vec<String>) -> Document {
        let mut question = Question::new("1");
        question.options = options;
        question.sub_questions.push(SubQuestion::new("a"));
        let mut section = Section::new("Section A");
        section.questions.push(question);
        section.questions.push(Question::new("2"));
        let mut doc = Document::default();
        doc.sections.push(section);
        doc
    }

    fn question_owner() -> OptionOwner {
        OptionOwner::Question(QuestionPath::new(0, 0))
    }

    fn sub_owner() -> OptionOwner {
        OptionOwner::SubQuestion(SubQuestionPath::new(0, 0, 0))
    }

    #[test]
    fn test_add_option_to_sub_question_creates_list() {
        let doc = doc_with_options(vec![]);
        assert!(doc.sections[0].questions[0].sub_questions[0].options.is_none());

        let new_doc = AddOption::new(sub_owner()).apply(&doc).unwrap();
        assert_eq!(
            new_doc.sections[0].questions[0].sub_questions[0].options,
            Some(vec!["New option".to_string()])
        );
        assert!(new_doc.sections[0].questions[0].options.is_empty());
    }

    #[test]
    fn test_set_option() {
        let doc = doc_with_options(vec!["(a) red".into(), "(b) blue".into()]);
        let new_doc = SetOption::new(OptionPath::new(question_owner(), 1), "(b) green")
            .apply(&doc)
            .unwrap();
        assert_eq!(new_doc.sections[0].questions[0].options, vec!["(a) red", "(b) green"]);
    }

    #[test]
    fn test_delete_from_absent_sub_question_list_is_out_of_range() {
        let doc = doc_with_options(vec![]);
        let err = DeleteOption::new(OptionPath::new(sub_owner(), 0)).apply(&doc).unwrap_err();
        assert!(matches!(
            err,
            EditError::OutOfRange(ModelError::OptionOutOfRange { index: 0, len: 0 })
        ));
        // The absent list is not materialized by a failed delete
        assert!(doc.sections[0].questions[0].sub_questions[0].options.is_none());
    }

    #[test]
    fn test_delete_sub_question_option() {
        let mut doc = doc_with_options(vec![]);
        doc.sections[0].questions[0].sub_questions[0].options =
            Some(vec!["(A) he submits".into(), "(B) he submitted".into()]);

        let new_doc = DeleteOption::new(OptionPath::new(sub_owner(), 0)).apply(&doc).unwrap();
        assert_eq!(
            new_doc.sections[0].questions[0].sub_questions[0].options(),
            &["(B) he submitted".to_string()]
        );
    }

    fn option_texts() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z(): ]{0,12}", 0..8)
    }

    proptest! {
        #[test]
        fn prop_add_option_appends(options in option_texts()) {
            let doc = doc_with_options(options.clone());
            let new_doc = AddOption::new(question_owner()).apply(&doc).unwrap();
            let new_options = &new_doc.sections[0].questions[0].options;

            prop_assert_eq!(new_options.len(), options.len() + 1);
            prop_assert_eq!(&new_options[..options.len()], &options[..]);
            prop_assert_eq!(&new_doc.sections[0].questions[1], &doc.sections[0].questions[1]);
        }

        #[test]
        fn prop_delete_option_shifts_tail(
            options in prop::collection::vec("[a-z]{1,6}", 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(options.len());
            let doc = doc_with_options(options.clone());
            let new_doc = DeleteOption::new(OptionPath::new(question_owner(), index))
                .apply(&doc)
                .unwrap();
            let new_options = &new_doc.sections[0].questions[0].options;

            prop_assert_eq!(new_options.len(), options.len() - 1);
            for j in 0..new_options.len() {
                if j < index {
                    prop_assert_eq!(&new_options[j], &options[j]);
                } else {
                    prop_assert_eq!(&new_options[j], &options[j + 1]);
                }
            }
        }
    }
}
