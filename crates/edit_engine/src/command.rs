//! Command system for exam paper editing

use crate::{
    AddAlternativeQuestion, AddContext, AddInstructions, AddOption, AddQuestion, AddSection,
    AddSubQuestion, AttachImage, DeleteOption, DeleteQuestion, DeleteSection, DeleteSubQuestion,
    EditError, RemoveContext, RemoveImage, RemoveInstructions, SetContext, SetHeaderField,
    SetOption, SetQuestionField, SetSectionTitle, SetSubQuestionField, SwapElements,
};
use exam_model::Document;
use serde::{Deserialize, Serialize};

/// Trait for all editing commands
///
/// `apply` returns a new document; the document passed in is left untouched.
/// Commands are total for in-range paths and fail only when a path does not
/// address an existing node.
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply this command to a document
    fn apply(&self, document: &Document) -> crate::Result<Document>;

    /// Get a display name for this command
    fn display_name(&self) -> &str;

    /// Clone this command into a box
    fn clone_box(&self) -> Box<dyn Command>;
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Any editing command, in serializable form.
///
/// Used to drive a session from a script of edits and to pass commands
/// across the application boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    SetHeaderField(SetHeaderField),
    AddInstructions(AddInstructions),
    RemoveInstructions(RemoveInstructions),
    AddSection(AddSection),
    DeleteSection(DeleteSection),
    SetSectionTitle(SetSectionTitle),
    AddQuestion(AddQuestion),
    AddAlternativeQuestion(AddAlternativeQuestion),
    DeleteQuestion(DeleteQuestion),
    SetQuestionField(SetQuestionField),
    AddContext(AddContext),
    SetContext(SetContext),
    RemoveContext(RemoveContext),
    AttachImage(AttachImage),
    RemoveImage(RemoveImage),
    AddSubQuestion(AddSubQuestion),
    DeleteSubQuestion(DeleteSubQuestion),
    SetSubQuestionField(SetSubQuestionField),
    AddOption(AddOption),
    DeleteOption(DeleteOption),
    SetOption(SetOption),
    SwapElements(SwapElements),
}

impl EditCommand {
    /// Parse a command from its JSON form
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| EditError::InvalidCommand(e.to_string()))
    }

    fn inner(&self) -> &dyn Command {
        match self {
            EditCommand::SetHeaderField(c) => c,
            EditCommand::AddInstructions(c) => c,
            EditCommand::RemoveInstructions(c) => c,
            EditCommand::AddSection(c) => c,
            EditCommand::DeleteSection(c) => c,
            EditCommand::SetSectionTitle(c) => c,
            EditCommand::AddQuestion(c) => c,
            EditCommand::AddAlternativeQuestion(c) => c,
            EditCommand::DeleteQuestion(c) => c,
            EditCommand::SetQuestionField(c) => c,
            EditCommand::AddContext(c) => c,
            EditCommand::SetContext(c) => c,
            EditCommand::RemoveContext(c) => c,
            EditCommand::AttachImage(c) => c,
            EditCommand::RemoveImage(c) => c,
            EditCommand::AddSubQuestion(c) => c,
            EditCommand::DeleteSubQuestion(c) => c,
            EditCommand::SetSubQuestionField(c) => c,
            EditCommand::AddOption(c) => c,
            EditCommand::DeleteOption(c) => c,
            EditCommand::SetOption(c) => c,
            EditCommand::SwapElements(c) => c,
        }
    }
}

impl Command for EditCommand {
    fn apply(&self, document: &Document) -> crate::Result<Document> {
        self.inner().apply(document)
    }

    fn display_name(&self) -> &str {
        self.inner().display_name()
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
