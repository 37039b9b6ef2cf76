//! Header commands: field updates and the general-instructions block

use crate::{Command, Result};
use exam_model::{Document, HeaderField, DEFAULT_INSTRUCTIONS};
use serde::{Deserialize, Serialize};

/// Replace one header field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetHeaderField {
    pub field: HeaderField,
    pub value: String,
}

impl SetHeaderField {
    pub fn new(field: HeaderField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl Command for SetHeaderField {
    fn apply(&self, document: &Document) -> Result<Document> {
        let mut new_doc = document.clone();
        let header = &mut new_doc.header;
        let value = self.value.clone();
        match self.field {
            HeaderField::School => header.school = value,
            HeaderField::ExamName => header.exam_name = value,
            HeaderField::Time => header.time = value,
            HeaderField::Marks => header.marks = value,
            HeaderField::Instructions => header.instructions = Some(value),
        }
        Ok(new_doc)
    }

    fn display_name(&self) -> &str {
        "Set Header Field"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Fill the general instructions with the standard three-line block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddInstructions {}

impl Command for AddInstructions {
    fn apply(&self, document: &Document) -> Result<Document> {
        SetHeaderField::new(HeaderField::Instructions, DEFAULT_INSTRUCTIONS).apply(document)
    }

    fn display_name(&self) -> &str {
        "Add Instructions"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Clear the general instructions; an empty block is not rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveInstructions {}

impl Command for RemoveInstructions {
    fn apply(&self, document: &Document) -> Result<Document> {
        SetHeaderField::new(HeaderField::Instructions, "").apply(document)
    }

    fn display_name(&self) -> &str {
        "Remove Instructions"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
