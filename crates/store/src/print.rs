//! Print layout
//!
//! Printing hands a self-contained HTML page to the host's print facility.
//! The page is A4 with no page margin; the paper canvas carries its own
//! padding, and every `no-print` control is hidden.

use crate::Result;
use std::path::{Path, PathBuf};

/// Page geometry for printing
#[derive(Debug, Clone, PartialEq)]
pub struct PrintLayout {
    pub page_size: String,
    pub margin_mm: f32,
    pub padding_mm: f32,
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            margin_mm: 0.0,
            padding_mm: 15.0,
        }
    }
}

impl PrintLayout {
    pub fn with_padding(padding_mm: f32) -> Self {
        Self {
            padding_mm,
            ..Self::default()
        }
    }

    /// Screen and print rules for the paper canvas
    pub fn stylesheet(&self) -> String {
        format!(
            "@media print {{\n\
             @page {{ size: {size}; margin: {margin}mm; }}\n\
             body {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; margin: 0; font-family: Calibri, sans-serif; }}\n\
             .no-print {{ display: none !important; }}\n\
             .paper-canvas {{ width: 100% !important; border: none !important; box-shadow: none !important; padding: {padding}mm !important; }}\n\
             textarea {{ border: none !important; background: transparent !important; resize: none; overflow: hidden; }}\n\
             }}\n\
             .paper-canvas {{ width: 210mm; min-height: 297mm; padding: {padding}mm; margin: 20px auto; background: white; font-family: Calibri, sans-serif; }}\n\
             table {{ border-collapse: collapse; width: 100%; }}\n\
             td, th {{ border: 1px solid black; padding: 5px; }}\n\
             .math {{ font-style: italic; }}\n",
            size = self.page_size,
            margin = self.margin_mm,
            padding = self.padding_mm,
        )
    }

    /// A printable page around rendered paper markup
    pub fn printable_document(&self, content: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Exam Paper</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            self.stylesheet(),
            content
        )
    }
}

/// The host's print facility
pub trait PrintHost {
    fn print(&self, document: &str) -> Result<()>;
}

/// Saves the printable page for printing from a browser
#[derive(Debug, Clone)]
pub struct FilePrintHost {
    path: PathBuf,
}

impl FilePrintHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintHost for FilePrintHost {
    fn print(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, document)?;
        tracing::info!("Printable page written to {}", self.path.display());
        Ok(())
    }
}
