//! Paper session state

use anyhow::{Context, Result};
use edit_engine::{AttachImage, EditCommand, EditingSession};
use exam_model::{Document, ElementRef, QuestionPath};
use render_model::{PaperRenderer, RenderMode};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use store::{export_word_document_named, ExportArtifact, ImageRegistry, PrintLayout};

/// One step of an edit script.
///
/// A step with a `drag` key is a drag gesture, one with `attach_image` selects
/// a diagram file, and anything else is an `op`-tagged edit command.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Value")]
pub enum ScriptStep {
    /// Pick up one element and drop it on another
    Drag { drag: ElementRef, drop: ElementRef },
    /// Select a diagram file for a question
    AttachImageFile {
        attach_image: QuestionPath,
        file: PathBuf,
    },
    Command(EditCommand),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DragStep {
    drag: ElementRef,
    drop: ElementRef,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AttachImageStep {
    attach_image: QuestionPath,
    file: PathBuf,
}

impl TryFrom<Value> for ScriptStep {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> serde_json::Result<Self> {
        if value.get("drag").is_some() {
            let DragStep { drag, drop } = serde_json::from_value(value)?;
            Ok(ScriptStep::Drag { drag, drop })
        } else if value.get("attach_image").is_some() {
            let AttachImageStep { attach_image, file } = serde_json::from_value(value)?;
            Ok(ScriptStep::AttachImageFile { attach_image, file })
        } else {
            serde_json::from_value(value).map(ScriptStep::Command)
        }
    }
}

/// Read an edit script: a JSON array of steps
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edit script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid edit script {}", path.display()))
}

/// Everything one open paper needs: its editing session, the render mode,
/// and the images selected for it
#[derive(Debug)]
pub struct PaperSession {
    editing: EditingSession,
    mode: RenderMode,
    images: ImageRegistry,
}

impl PaperSession {
    /// Open a freshly ingested paper in edit mode
    pub fn new(document: Document) -> Self {
        Self {
            editing: EditingSession::new(document),
            mode: RenderMode::Edit,
            images: ImageRegistry::new(),
        }
    }

    pub fn document(&self) -> &Document {
        self.editing.document()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Flip between edit and view mode
    pub fn toggle_mode(&mut self) -> RenderMode {
        self.mode = self.mode.toggled();
        tracing::debug!("Switched to {} mode", self.mode.display_name());
        self.mode
    }

    /// Apply one script step
    pub fn run(&mut self, step: &ScriptStep) -> Result<()> {
        match step {
            ScriptStep::Drag { drag, drop } => {
                self.editing.pick_up(*drag);
                if !self.editing.drop_on(*drop)? {
                    tracing::debug!("Drop on question {} left the paper unchanged", drop.path);
                }
            }
            ScriptStep::AttachImageFile { attach_image, file } => {
                let replaced = self.document().question(*attach_image)?.diagram().cloned();
                let image = self.images.register(file)?;
                self.editing.execute(&AttachImage::new(*attach_image, image))?;
                if let Some(previous) = replaced.as_ref().and_then(|r| self.images.resolve(r)) {
                    tracing::debug!(
                        "Replaced diagram {} on question {}",
                        previous.display(),
                        attach_image
                    );
                }
            }
            ScriptStep::Command(command) => {
                if let EditCommand::AttachImage(attach) = command {
                    if !self.images.contains(&attach.image) {
                        tracing::warn!(
                            "Diagram {} was not selected in this session; attaching as given",
                            attach.image
                        );
                    }
                }
                self.editing.execute(command)?;
            }
        }
        Ok(())
    }

    /// Apply a script, stopping at the first failing step
    pub fn run_script(&mut self, steps: &[ScriptStep]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            self.run(step)
                .with_context(|| format!("Edit script step {} failed", index + 1))?;
        }
        tracing::info!(
            "Applied {} script steps (revision {})",
            steps.len(),
            self.editing.revision()
        );
        Ok(())
    }

    /// Render the paper in the current mode
    pub fn render(&self) -> String {
        PaperRenderer::new(self.mode)
            .with_drag_origin(self.editing.drag().origin())
            .render(self.document())
    }

    /// Render the finished paper, as shown after "Finish Editing"
    fn render_finished(&self) -> String {
        PaperRenderer::new(RenderMode::View).render(self.document())
    }

    /// Word export of the finished paper
    pub fn export(&self, file_name: &str) -> ExportArtifact {
        export_word_document_named(&self.render_finished(), file_name)
    }

    /// Printable page of the finished paper
    pub fn printable(&self, layout: &PrintLayout) -> String {
        layout.printable_document(&self.render_finished())
    }

    /// End the session, releasing its images and keeping the final paper
    pub fn close(mut self) -> Document {
        self.images.release_all();
        self.editing.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::{ElementKind, Question, Section};
    use tempfile::TempDir;

    fn sample_session() -> PaperSession {
        let mut section = Section::new("Section A");
        section.questions.push(Question::new("1"));
        section.questions.push(Question::new("2"));
        let mut doc = Document::default();
        doc.sections.push(section);
        PaperSession::new(doc)
    }

    fn parse(json: &str) -> Vec<ScriptStep> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_script_commands_and_drags() {
        let mut session = sample_session();
        let steps = parse(
            r#"[
                {"op": "add_option", "owner": {"level": "question", "section": 0, "question": 0}},
                {"op": "set_question_field", "path": {"section": 0, "question": 0}, "field": "text", "value": "Pick one:"},
                {"drag": {"path": {"section": 0, "question": 0}, "kind": "options"},
                 "drop": {"path": {"section": 0, "question": 0}, "kind": "context"}}
            ]"#,
        );

        session.run_script(&steps).unwrap();

        let question = &session.document().sections[0].questions[0];
        assert_eq!(question.text, "Pick one:");
        assert_eq!(question.options, ["New option"]);
        assert_eq!(question.order.unwrap().kinds()[0], ElementKind::Options);
    }

    #[test]
    fn test_command_errors_keep_their_detail() {
        let err =
            serde_json::from_str::<Vec<ScriptStep>>(r#"[{"op": "add_questoin", "section": 0}]"#)
                .unwrap_err();
        assert!(err.to_string().contains("unknown variant `add_questoin`"));

        let err = serde_json::from_str::<Vec<ScriptStep>>(r#"[{"op": "delete_section"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `section`"));

        let err = serde_json::from_str::<Vec<ScriptStep>>(
            r#"[{"drag": {"path": {"section": 0, "question": 0}, "kind": "text"}}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `drop`"));
    }

    #[test]
    fn test_cross_question_drag_is_ignored() {
        let mut session = sample_session();
        let before = session.document().clone();
        let steps = parse(
            r#"[{"drag": {"path": {"section": 0, "question": 0}, "kind": "text"},
                 "drop": {"path": {"section": 0, "question": 1}, "kind": "image"}}]"#,
        );

        session.run_script(&steps).unwrap();
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_failing_step_is_reported() {
        let mut session = sample_session();
        let steps = parse(r#"[{"op": "add_section"}, {"op": "delete_section", "section": 9}]"#);

        let err = session.run_script(&steps).unwrap_err();
        assert!(err.to_string().contains("step 2"));
        // The first step was applied before the failure
        assert_eq!(session.document().sections.len(), 2);
    }

    #[test]
    fn test_attach_image_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("graph.png");
        std::fs::write(&file, b"png").unwrap();
        let mut session = sample_session();

        session
            .run(&ScriptStep::AttachImageFile {
                attach_image: QuestionPath::new(0, 1),
                file: file.clone(),
            })
            .unwrap();

        let image = session.document().sections[0].questions[1].image.clone().unwrap();
        assert_eq!(session.images.resolve(&image), Some(file.as_path()));
        assert!(session.render().contains("graph.png"));

        // A second selection replaces the first diagram
        let second = temp_dir.path().join("graph2.png");
        std::fs::write(&second, b"png").unwrap();
        session
            .run(&ScriptStep::AttachImageFile {
                attach_image: QuestionPath::new(0, 1),
                file: second,
            })
            .unwrap();
        assert!(session.render().contains("graph2.png"));

        let doc = session.close();
        assert!(doc.sections[0].questions[1].image.is_some());
    }

    #[test]
    fn test_export_uses_finished_paper() {
        let mut session = sample_session();
        assert_eq!(session.mode(), RenderMode::Edit);

        let artifact = session.export("paper.doc");
        let text = String::from_utf8_lossy(&artifact.bytes);
        assert!(!text.contains("<textarea"));
        assert!(text.contains("Section A"));

        assert_eq!(session.toggle_mode(), RenderMode::View);
        assert!(!session.render().contains("<textarea"));
    }

    #[test]
    fn test_printable_page() {
        let session = sample_session();
        let page = session.printable(&PrintLayout::default());
        assert!(page.contains("@page { size: A4; margin: 0mm; }"));
        assert!(page.contains("class=\"paper-canvas\""));
    }
}
