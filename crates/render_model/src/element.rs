//! Renderable element descriptors

use crate::{expand_view_text, TextSegment};
use exam_model::{ElementKind, ElementRef, ImageRef, SubQuestion};
use serde::{Deserialize, Serialize};

/// Content of one question facet, borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementContent<'a> {
    Context(&'a str),
    Text(&'a str),
    Image(&'a ImageRef),
    Options(&'a [String]),
    SubQuestions(&'a [SubQuestion]),
}

impl ElementContent<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Context(_) => ElementKind::Context,
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Options(_) => ElementKind::Options,
            ElementContent::SubQuestions(_) => ElementKind::SubQuestions,
        }
    }
}

/// One renderable facet of a question, in render order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDescriptor<'a> {
    /// Which question and facet this is; also the drag source and drop target
    pub element: ElementRef,
    pub content: ElementContent<'a>,
    /// Whether this element is the one currently being dragged
    pub dragging: bool,
}

impl<'a> ElementDescriptor<'a> {
    pub fn kind(&self) -> ElementKind {
        self.element.kind
    }

    /// View-mode segments for the single-text facets (context and text)
    pub fn view_text(&self) -> Option<Vec<TextSegment>> {
        match self.content {
            ElementContent::Context(text) | ElementContent::Text(text) => {
                Some(expand_view_text(text))
            }
            _ => None,
        }
    }
}

/// Threshold above which an option is considered long
const LONG_OPTION_CHARS: usize = 50;
/// Threshold above which a two-way choice is laid out as stacked passages
const PASSAGE_OPTION_CHARS: usize = 100;

/// How an option list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionsLayout {
    /// Two long choices, each set off as its own block
    Stacked,
    /// One option per line
    List,
    /// Two-column grid of short options
    Grid,
}

impl OptionsLayout {
    /// Pick the layout for an option list
    pub fn for_options(options: &[String]) -> Self {
        let longest = options.iter().map(|o| o.chars().count()).max().unwrap_or(0);
        if options.len() == 2 && longest > PASSAGE_OPTION_CHARS {
            OptionsLayout::Stacked
        } else if longest > LONG_OPTION_CHARS {
            OptionsLayout::List
        } else {
            OptionsLayout::Grid
        }
    }

    /// CSS class used in paper markup
    pub fn class_name(&self) -> &'static str {
        match self {
            OptionsLayout::Stacked => "options-stacked",
            OptionsLayout::List => "options-list",
            OptionsLayout::Grid => "options-grid",
        }
    }

    /// Whether an individual option is emphasized: a long choice in a stacked pair
    pub fn emphasizes(&self, option: &str) -> bool {
        matches!(self, OptionsLayout::Stacked) && option.chars().count() > PASSAGE_OPTION_CHARS
    }
}
