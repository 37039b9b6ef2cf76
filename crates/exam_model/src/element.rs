//! Element kinds and the per-question element order
//!
//! A question is presented as up to five facets: its context passage, its
//! text, a diagram, its options and its sub-questions. The order in which
//! they appear is a permutation of [`ElementKind`] stored on the question.
//! [`ElementOrder`] can only hold a permutation, so every order a question
//! carries lists each kind exactly once whether or not that facet is present.

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Number of positional facets on a question
pub const ELEMENT_COUNT: usize = 5;

/// A positional facet of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Context,
    Text,
    Image,
    Options,
    SubQuestions,
}

impl ElementKind {
    /// All kinds, in canonical order
    pub const ALL: [ElementKind; ELEMENT_COUNT] = [
        ElementKind::Context,
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Options,
        ElementKind::SubQuestions,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Context => "context",
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Options => "options",
            ElementKind::SubQuestions => "sub_questions",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::InvalidOrder(format!("unknown element kind: {s}")))
    }
}

/// Render order of a question's facets. Always a permutation of [`ElementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ElementKind>", into = "Vec<ElementKind>")]
pub struct ElementOrder([ElementKind; ELEMENT_COUNT]);

impl ElementOrder {
    /// Order assigned to ordinary questions: context, text, image, options, sub-questions
    pub const fn canonical() -> Self {
        Self(ElementKind::ALL)
    }

    /// Order assigned to "OR" questions, which put their choices right after the text
    pub const fn alternative() -> Self {
        Self([
            ElementKind::Text,
            ElementKind::Options,
            ElementKind::Context,
            ElementKind::Image,
            ElementKind::SubQuestions,
        ])
    }

    /// The kinds in render order
    pub fn kinds(&self) -> &[ElementKind; ELEMENT_COUNT] {
        &self.0
    }

    /// Iterate over the kinds in render order
    pub fn iter(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.0.iter().copied()
    }

    /// Position of a kind within the order
    pub fn position(&self, kind: ElementKind) -> usize {
        // Every kind occurs exactly once, so the search always succeeds.
        self.0.iter().position(|k| *k == kind).unwrap_or_default()
    }

    /// Return a new order with the positions of `a` and `b` exchanged
    pub fn swapped(&self, a: ElementKind, b: ElementKind) -> Self {
        let mut kinds = self.0;
        kinds.swap(self.position(a), self.position(b));
        Self(kinds)
    }
}

impl Default for ElementOrder {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<ElementKind>> for ElementOrder {
    type Error = ModelError;

    fn try_from(kinds: Vec<ElementKind>) -> Result<Self> {
        let array: [ElementKind; ELEMENT_COUNT] = kinds.try_into().map_err(|v: Vec<_>| {
            ModelError::InvalidOrder(format!(
                "expected {ELEMENT_COUNT} element kinds, got {}",
                v.len()
            ))
        })?;

        for kind in ElementKind::ALL {
            if !array.contains(&kind) {
                return Err(ModelError::InvalidOrder(format!("missing element kind: {kind}")));
            }
        }

        Ok(Self(array))
    }
}

impl From<ElementOrder> for Vec<ElementKind> {
    fn from(order: ElementOrder) -> Self {
        order.0.to_vec()
    }
}
