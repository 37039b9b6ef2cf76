//! Word-compatible export
//!
//! The rendered paper is wrapped in an HTML document carrying the Office
//! namespaces and served as `application/msword`, which word processors
//! open as a regular document.

use crate::Result;
use std::path::{Path, PathBuf};

/// Default download name
pub const EXPORT_FILE_NAME: &str = "exam_paper.doc";

/// MIME type of the exported document
pub const WORD_MIME_TYPE: &str = "application/msword";

/// Table borders for the exported paper; edit controls are hidden
pub const EXPORT_STYLESHEET: &str =
    "table{border-collapse:collapse;width:100%;}td,th{border:1px solid black;padding:5px;} .no-print{display:none;}";

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// A finished export, ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its file name
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        tracing::info!("Exported {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }

    /// Write the artifact into `dir` asynchronously
    pub async fn write_to_async(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!("Exported {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Wrap rendered paper markup into a Word-compatible document
pub fn word_document_html(content: &str) -> String {
    format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\
         <head><meta charset='utf-8'><title>Exam Paper</title>\
         <style>{EXPORT_STYLESHEET}</style></head>\
         <body>{content}</body></html>"
    )
}

/// Export rendered markup under the default file name
pub fn export_word_document(content: &str) -> ExportArtifact {
    export_word_document_named(content, EXPORT_FILE_NAME)
}

/// Export rendered markup under a chosen file name
pub fn export_word_document_named(content: &str, file_name: impl Into<String>) -> ExportArtifact {
    let mut bytes = BYTE_ORDER_MARK.as_bytes().to_vec();
    bytes.extend_from_slice(word_document_html(content).as_bytes());
    ExportArtifact {
        file_name: file_name.into(),
        mime_type: WORD_MIME_TYPE,
        bytes,
    }
}
