//! Section commands: add, delete, and retitle sections

use crate::{Command, Result};
use exam_model::{Document, Section};
use serde::{Deserialize, Serialize};

/// Append an empty section titled "NEW SECTION"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSection {}

impl Command for AddSection {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.sections.push(Section::placeholder());
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Add Section"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove a section; later sections move up and keep their titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSection {
    pub section: usize,
}

impl DeleteSection {
    pub fn new(section: usize) -> Self {
        Self { section }
    }
}

impl Command for DeleteSection {
    fn apply(&self, document: &Document) -> Result<Document> {
        document.section(self.section)?;

        let mut new_doc = document.clone();
        new_doc.sections.remove(self.section);
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Delete Section"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace a section title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSectionTitle {
    pub section: usize,
    pub title: String,
}

impl SetSectionTitle {
    pub fn new(section: usize, title: impl Into<String>) -> Self {
        Self {
            section,
            title: title.into(),
        }
    }
}

impl Command for SetSectionTitle {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        new_doc.section_mut(self.section)?.title = self.title.clone();
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Section Title"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
