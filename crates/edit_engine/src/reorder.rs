//! Element reordering by drag and drop
//!
//! Dragging one facet of a question onto another exchanges their positions
//! in the question's element order. This is a transposition, not a list
//! move: a three-way reshuffle takes several drags.
//!
//! The drag is a two-state machine. Picking an element up arms it with the
//! origin; every drop returns it to idle, whether or not the drop was
//! accepted. A drop is accepted only on the question the drag started from.

use crate::{Command, Result};
use exam_model::{Document, ElementKind, ElementRef, QuestionPath};
use serde::{Deserialize, Serialize};

/// Exchange the positions of two element kinds within one question
///
/// A question without a stored order gets the canonical order before the
/// swap is applied, so the result is always materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapElements {
    pub path: QuestionPath,
    pub source: ElementKind,
    pub target: ElementKind,
}

impl SwapElements {
    pub fn new(path: QuestionPath, source: ElementKind, target: ElementKind) -> Self {
        Self {
            path,
            source,
            target,
        }
    }
}

impl Command for SwapElements {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let question = new_doc.question_mut(self.path)?;
        let order = question.effective_order();
        question.order = Some(order.swapped(self.source, self.target));
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Reorder Elements"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Drag state of the reorder gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// An element has been picked up and not yet dropped
    Armed(ElementRef),
}

impl DragState {
    /// Start a drag from the given element, replacing any pending one
    pub fn pick_up(&mut self, origin: ElementRef) {
        *self = DragState::Armed(origin);
    }

    /// The element being dragged, if any
    pub fn origin(&self) -> Option<ElementRef> {
        match self {
            DragState::Idle => None,
            DragState::Armed(origin) => Some(*origin),
        }
    }

    /// Whether `element` is the one currently being dragged
    pub fn is_dragging(&self, element: ElementRef) -> bool {
        self.origin() == Some(element)
    }

    /// Abandon the drag without dropping
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Drop onto `target`, returning to idle.
    ///
    /// Returns the reordered document when the drop lands on the question
    /// the drag started from, and `None` when there was no drag or the
    /// target belongs to another question.
    pub fn drop_on(&mut self, target: ElementRef, document: &Document) -> Result<Option<Document>> {
        let Some(origin) = std::mem::take(self).origin() else {
            tracing::debug!("Ignoring drop on {} with no drag in progress", target.kind);
            return Ok(None);
        };

        if origin.path != target.path {
            tracing::debug!(
                "Ignoring drop from question {} onto question {}",
                origin.path,
                target.path
            );
            return Ok(None);
        }

        let swap = SwapElements::new(target.path, origin.kind, target.kind);
        swap.apply(document).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::{ElementOrder, Question, Section};
    use proptest::prelude::*;

    fn create_test_doc() -> Document {
        let mut section = Section::new("Section A");
        section.questions.push(Question::new("1"));
        section.questions.push(Question::alternative("2"));
        let mut legacy = Question::new("3");
        legacy.order = None;
        section.questions.push(legacy);
        let mut doc = Document::default();
        doc.sections.push(section);
        doc
    }

    fn element(question: usize, kind: ElementKind) -> ElementRef {
        ElementRef::new(QuestionPath::new(0, question), kind)
    }

    #[test]
    fn test_drop_swaps_within_question() {
        let doc = create_test_doc();
        let mut drag = DragState::default();

        drag.pick_up(element(0, ElementKind::Image));
        let new_doc = drag
            .drop_on(element(0, ElementKind::Context), &doc)
            .unwrap()
            .expect("drop accepted");

        let order = new_doc.sections[0].questions[0].order.unwrap();
        assert_eq!(order.position(ElementKind::Image), 0);
        assert_eq!(order.position(ElementKind::Context), 2);
        assert_eq!(order.position(ElementKind::Text), 1);
        assert_eq!(new_doc.sections[0].questions[1], doc.sections[0].questions[1]);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_drop_on_other_question_is_ignored() {
        let doc = create_test_doc();
        let mut drag = DragState::default();

        drag.pick_up(element(0, ElementKind::Text));
        let result = drag.drop_on(element(1, ElementKind::Options), &doc).unwrap();

        assert!(result.is_none());
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_drop_without_pick_up_is_ignored() {
        let doc = create_test_doc();
        let mut drag = DragState::default();
        assert!(drag.drop_on(element(0, ElementKind::Text), &doc).unwrap().is_none());
    }

    #[test]
    fn test_stale_origin_does_not_leak_into_next_drop() {
        let doc = create_test_doc();
        let mut drag = DragState::default();

        drag.pick_up(element(0, ElementKind::Text));
        assert!(drag.drop_on(element(1, ElementKind::Text), &doc).unwrap().is_none());
        // The rejected drop reset the state, so a later drop on question 0 does nothing
        assert!(drag.drop_on(element(0, ElementKind::Image), &doc).unwrap().is_none());
    }

    #[test]
    fn test_legacy_question_gets_canonical_order_before_swap() {
        let doc = create_test_doc();
        let mut drag = DragState::default();

        drag.pick_up(element(2, ElementKind::SubQuestions));
        let new_doc = drag
            .drop_on(element(2, ElementKind::Text), &doc)
            .unwrap()
            .unwrap();

        let expected = ElementOrder::canonical().swapped(ElementKind::SubQuestions, ElementKind::Text);
        assert_eq!(new_doc.sections[0].questions[2].order, Some(expected));
    }

    #[test]
    fn test_self_drop_materializes_order() {
        let doc = create_test_doc();
        let new_doc = SwapElements::new(QuestionPath::new(0, 2), ElementKind::Image, ElementKind::Image)
            .apply(&doc)
            .unwrap();
        assert_eq!(new_doc.sections[0].questions[2].order, Some(ElementOrder::canonical()));
    }

    #[test]
    fn test_swap_does_not_require_present_elements() {
        // Question 1 has no context or image; their slots still move
        let doc = create_test_doc();
        let path = QuestionPath::new(0, 0);
        let new_doc = SwapElements::new(path, ElementKind::Context, ElementKind::SubQuestions)
            .apply(&doc)
            .unwrap();
        let order = new_doc.question(path).unwrap().order.unwrap();
        assert_eq!(order.position(ElementKind::SubQuestions), 0);
    }

    #[test]
    fn test_is_dragging() {
        let mut drag = DragState::default();
        drag.pick_up(element(1, ElementKind::Options));
        assert!(drag.is_dragging(element(1, ElementKind::Options)));
        assert!(!drag.is_dragging(element(0, ElementKind::Options)));
        drag.cancel();
        assert!(!drag.is_dragging(element(1, ElementKind::Options)));
    }

    fn any_kind() -> impl Strategy<Value = ElementKind> {
        prop::sample::select(ElementKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_gestures_keep_orders_valid_and_scoped(
            gestures in prop::collection::vec((0usize..3, any_kind(), 0usize..3, any_kind()), 0..30)
        ) {
            let mut doc = create_test_doc();
            let mut drag = DragState::default();

            for (from_q, from_kind, to_q, to_kind) in gestures {
                let before = doc.clone();
                drag.pick_up(element(from_q, from_kind));
                let result = drag.drop_on(element(to_q, to_kind), &doc).unwrap();
                prop_assert_eq!(drag, DragState::Idle);

                match result {
                    Some(next) => {
                        prop_assert_eq!(from_q, to_q);
                        let old = before.sections[0].questions[to_q].effective_order();
                        let new = next.sections[0].questions[to_q].order.unwrap();
                        prop_assert_eq!(new, old.swapped(from_kind, to_kind));
                        for other in (0..3).filter(|q| *q != to_q) {
                            prop_assert_eq!(
                                &next.sections[0].questions[other],
                                &before.sections[0].questions[other]
                            );
                        }
                        doc = next;
                    }
                    None => prop_assert_ne!(from_q, to_q),
                }
            }
        }
    }
}
