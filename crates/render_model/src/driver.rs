//! Presentation driver: a question's elements in render order

use crate::{ElementContent, ElementDescriptor, Result};
use exam_model::{
    Document, ElementKind, ElementOrder, ElementRef, Question, QuestionPath, ELEMENT_COUNT,
};
use std::iter::FusedIterator;

/// Iterator over the present elements of one question, following its order.
///
/// Yields at most five descriptors. Context and image appear only when set
/// to a non-empty value,
/// options and sub-questions only when non-empty, text always. The
/// iterator is `Clone`, so a render can restart it from the same state;
/// a fresh one is built from the current question on every render.
#[derive(Debug, Clone)]
pub struct QuestionElements<'a> {
    question: &'a Question,
    path: QuestionPath,
    order: ElementOrder,
    drag_origin: Option<ElementRef>,
    next: usize,
}

/// Walk the elements of `question`, marking the one that matches `drag_origin`
pub fn question_elements(
    question: &Question,
    path: QuestionPath,
    drag_origin: Option<ElementRef>,
) -> QuestionElements<'_> {
    QuestionElements {
        question,
        path,
        order: question.effective_order(),
        drag_origin,
        next: 0,
    }
}

/// Walk the elements of the question at `path` in `document`
pub fn document_question_elements(
    document: &Document,
    path: QuestionPath,
    drag_origin: Option<ElementRef>,
) -> Result<QuestionElements<'_>> {
    Ok(question_elements(document.question(path)?, path, drag_origin))
}

fn element_content(question: &Question, kind: ElementKind) -> Option<ElementContent<'_>> {
    match kind {
        ElementKind::Context => question.context_passage().map(ElementContent::Context),
        ElementKind::Text => Some(ElementContent::Text(&question.text)),
        ElementKind::Image => question.diagram().map(ElementContent::Image),
        ElementKind::Options => {
            (!question.options.is_empty()).then_some(ElementContent::Options(&question.options))
        }
        ElementKind::SubQuestions => (!question.sub_questions.is_empty())
            .then_some(ElementContent::SubQuestions(&question.sub_questions)),
    }
}

impl<'a> Iterator for QuestionElements<'a> {
    type Item = ElementDescriptor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < ELEMENT_COUNT {
            let kind = self.order.kinds()[self.next];
            self.next += 1;

            if let Some(content) = element_content(self.question, kind) {
                let element = ElementRef::new(self.path, kind);
                return Some(ElementDescriptor {
                    element,
                    content,
                    dragging: self.drag_origin == Some(element),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(ELEMENT_COUNT - self.next))
    }
}

impl FusedIterator for QuestionElements<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::{ImageRef, Section, SubQuestion};
    use proptest::prelude::*;

    fn path() -> QuestionPath {
        QuestionPath::new(0, 0)
    }

    fn kinds(question: &Question) -> Vec<ElementKind> {
        question_elements(question, path(), None).map(|d| d.kind()).collect()
    }

    #[test]
    fn test_bare_question_yields_only_text() {
        let question = Question::new("1");
        assert_eq!(kinds(&question), vec![ElementKind::Text]);
    }

    #[test]
    fn test_full_question_follows_order() {
        let mut question = Question::alternative("2");
        question.context = Some("A poem".into());
        question.image = Some(ImageRef::new("img"));
        question.sub_questions.push(SubQuestion::new("a"));

        assert_eq!(
            kinds(&question),
            vec![
                ElementKind::Text,
                ElementKind::Options,
                ElementKind::Context,
                ElementKind::Image,
                ElementKind::SubQuestions,
            ]
        );
    }

    #[test]
    fn test_empty_context_and_image_are_skipped() {
        let mut question = Question::new("1");
        question.context = Some(String::new());
        question.image = Some(ImageRef::new(""));
        assert_eq!(kinds(&question), vec![ElementKind::Text]);
    }

    #[test]
    fn test_legacy_question_uses_canonical_order() {
        let mut question = Question::new("1");
        question.order = None;
        question.options.push("(a) yes".into());
        question.context = Some("Read:".into());
        assert_eq!(
            kinds(&question),
            vec![ElementKind::Context, ElementKind::Text, ElementKind::Options]
        );
    }

    #[test]
    fn test_iterator_is_restartable() {
        let mut question = Question::new("1");
        question.options.push("(a)".into());
        let elements = question_elements(&question, path(), None);

        let first: Vec<_> = elements.clone().collect();
        let second: Vec<_> = elements.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_dragging_marker() {
        let mut question = Question::new("1");
        question.options.push("(a)".into());
        let origin = ElementRef::new(path(), ElementKind::Options);

        let dragging: Vec<_> = question_elements(&question, path(), Some(origin))
            .map(|d| (d.kind(), d.dragging))
            .collect();
        assert_eq!(
            dragging,
            vec![(ElementKind::Text, false), (ElementKind::Options, true)]
        );
    }

    #[test]
    fn test_document_lookup() {
        let mut doc = Document::default();
        doc.sections.push(Section::new("A"));
        assert!(document_question_elements(&doc, path(), None).is_err());

        doc.sections[0].questions.push(Question::new("1"));
        let count = document_question_elements(&doc, path(), None).unwrap().count();
        assert_eq!(count, 1);
    }

    fn any_order() -> impl Strategy<Value = ElementOrder> {
        Just(ElementKind::ALL.to_vec())
            .prop_shuffle()
            .prop_map(|kinds| ElementOrder::try_from(kinds).unwrap())
    }

    fn maybe_text() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(vec![String::new(), "Extract".to_string()]))
    }

    proptest! {
        #[test]
        fn prop_yields_present_kinds_in_order(
            order in any_order(),
            context in maybe_text(),
            image in maybe_text(),
            option_count in 0usize..3,
            sub_count in 0usize..3,
        ) {
            let mut question = Question::new("1");
            question.order = Some(order);
            question.context = context;
            question.image = image.map(ImageRef::new);
            question.options = (0..option_count).map(|i| format!("({i})")).collect();
            question.sub_questions = (0..sub_count).map(|i| SubQuestion::new(i.to_string())).collect();

            let expected: Vec<_> = order.iter().filter(|k| question.has_element(*k)).collect();
            prop_assert_eq!(kinds(&question), expected);
        }
    }
}
