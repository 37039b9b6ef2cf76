//! Editing session: owns the current document and the drag state

use crate::{Command, DragState, Result};
use exam_model::{Document, ElementRef};

/// The single writer of an exam paper.
///
/// Each command replaces the document with the one it returns; nothing
/// else holds a mutable handle to it. The session lives from a successful
/// ingestion until the user starts a new paper.
#[derive(Debug, Clone, Default)]
pub struct EditingSession {
    /// Current document
    document: Document,
    /// Pending reorder gesture
    drag: DragState,
    /// Number of accepted changes since the session started
    revision: u64,
}

impl EditingSession {
    /// Create a session over an ingested document
    pub fn new(document: Document) -> Self {
        Self {
            document,
            drag: DragState::Idle,
            revision: 0,
        }
    }

    /// Get the current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the session, keeping its final document
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Get the drag state
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Number of changes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Execute a command, replacing the current document on success.
    /// On failure the document is left as it was.
    pub fn execute(&mut self, command: &dyn Command) -> Result<()> {
        let document = command.apply(&self.document)?;
        tracing::debug!("Applied command: {}", command.display_name());
        self.replace(document);
        Ok(())
    }

    /// Begin dragging a question element
    pub fn pick_up(&mut self, origin: ElementRef) {
        tracing::debug!("Drag started at {} of question {}", origin.kind, origin.path);
        self.drag.pick_up(origin);
    }

    /// Drop the dragged element onto `target`. Returns whether the order changed.
    pub fn drop_on(&mut self, target: ElementRef) -> Result<bool> {
        match self.drag.drop_on(target, &self.document)? {
            Some(document) => {
                tracing::debug!(
                    "Reordered question {}: {:?}",
                    target.path,
                    document.question(target.path)?.order
                );
                self.replace(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Abandon a drag without dropping
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    fn replace(&mut self, document: Document) {
        self.document = document;
        self.revision += 1;
    }
}
