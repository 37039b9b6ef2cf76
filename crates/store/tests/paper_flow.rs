//! End-to-end paper flow: ingest, edit, reorder, render, export

use edit_engine::{
    AddAlternativeQuestion, AddContext, AddOption, AddSubQuestion, DeleteOption, EditingSession,
    SetOption,
};
use exam_model::{ElementKind, ElementRef, Header, OptionOwner, OptionPath, QuestionPath};
use render_model::{PaperRenderer, RenderMode};
use std::time::Duration;
use store::{
    export_word_document, FileConversionService, IngestionController, PrintLayout, SourceFile,
};
use tempfile::TempDir;

const PAYLOAD: &str = r#"{
    "header": {"school": "Greenfield Public School", "examName": "ANNUAL EXAMINATION", "marks": "80"},
    "sections": [
        {
            "title": "SECTION A: READING",
            "questions": [
                {
                    "number": "7",
                    "text": "Read the passage and answer: ",
                    "marks": "5",
                    "context": "The river ran quietly through the valley.",
                    "sub_questions": [
                        {"number": "a", "text": "What ran through the valley?"},
                        {"number": "b", "text": "Describe the river.", "marks": "2"}
                    ]
                }
            ]
        }
    ]
}"#;

async fn ingest_payload(dir: &TempDir) -> exam_model::Document {
    let path = dir.path().join("annual.json");
    std::fs::write(&path, PAYLOAD).unwrap();

    let controller = IngestionController::new(
        FileConversionService::new(dir.path()),
        Header::default(),
        Duration::from_secs(5),
    );
    controller.load(SourceFile::read(&path).await.unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_ingest_edit_reorder_export() {
    let temp_dir = TempDir::new().unwrap();
    let document = ingest_payload(&temp_dir).await;

    assert_eq!(document.header.time, "3 Hours");
    assert_eq!(document.sections[0].questions[0].sub_questions[0].marks, "1");

    let mut session = EditingSession::new(document);
    let q7 = QuestionPath::new(0, 0);

    // Next question number follows the last one
    session.execute(&AddAlternativeQuestion::new(0)).unwrap();
    let q8 = QuestionPath::new(0, 1);
    assert_eq!(session.document().question(q8).unwrap().number, "8");

    // Sub-question letters continue after the existing two
    session.execute(&AddSubQuestion::new(q7)).unwrap();
    assert_eq!(session.document().question(q7).unwrap().sub_questions[2].number, "c");

    // Options on the OR question
    session.execute(&AddOption::new(OptionOwner::Question(q8))).unwrap();
    session
        .execute(&SetOption::new(OptionPath::new(q8, 2), "(C) Third choice"))
        .unwrap();
    session.execute(&DeleteOption::new(OptionPath::new(q8, 0))).unwrap();
    assert_eq!(
        session.document().question(q8).unwrap().options,
        ["(B) Second choice question here...", "(C) Third choice"]
    );

    // Context on the OR question so both questions can be reordered
    session.execute(&AddContext::new(q8)).unwrap();

    // Move the passage below the question text on Q7
    session.pick_up(ElementRef::new(q7, ElementKind::Context));
    assert!(session.drop_on(ElementRef::new(q7, ElementKind::Text)).unwrap());

    // A drag that wanders onto Q8 changes nothing
    let before = session.document().clone();
    session.pick_up(ElementRef::new(q7, ElementKind::Text));
    assert!(!session.drop_on(ElementRef::new(q8, ElementKind::Context)).unwrap());
    assert_eq!(session.document(), &before);

    let document = session.into_document();

    let edit_before = PaperRenderer::new(RenderMode::Edit).render(&document);
    let view = PaperRenderer::new(RenderMode::View).render(&document);
    let edit_after = PaperRenderer::new(RenderMode::Edit).render(&document);
    assert_eq!(edit_before, edit_after);

    // Q7 now shows its text before the passage
    let text_at = view.find("Read the passage and answer:").unwrap();
    let context_at = view.find("The river ran quietly").unwrap();
    assert!(text_at < context_at);
    assert!(view.contains("Read the passage and answer:<br/>"));

    let artifact = export_word_document(&view);
    let exported = String::from_utf8(artifact.bytes[3..].to_vec()).unwrap();
    assert!(exported.contains("Greenfield Public School"));
    assert!(exported.contains("(C) Third choice"));
    assert!(!exported.contains("no-print\""));

    let page = PrintLayout::default().printable_document(&view);
    assert!(page.contains("ANNUAL EXAMINATION"));
}

#[tokio::test]
async fn test_failed_ingestion_leaves_no_document() {
    let temp_dir = TempDir::new().unwrap();
    let controller = IngestionController::new(
        FileConversionService::new(temp_dir.path()),
        Header::default(),
        Duration::from_secs(5),
    );

    let result = controller
        .load(SourceFile::new("unknown.pdf", b"%PDF".to_vec()))
        .await;

    assert!(matches!(result, Err(store::IngestError::Service { status: 404, .. })));
}
