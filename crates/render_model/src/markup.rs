//! Markup buffer and escaping helpers

use crate::TextSegment;

/// Indented line buffer for building markup
#[derive(Debug)]
pub struct MarkupWriter {
    buffer: String,
    depth: usize,
    indent: &'static str,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent: "  ",
        }
    }

    /// Append one line at the current depth
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append an opening tag line and indent
    pub fn open(&mut self, tag: &str) {
        self.line(tag);
        self.depth += 1;
    }

    /// Dedent and append a closing tag line
    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for element content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render view-mode segments: plain text escaped with `<br/>` for newlines,
/// math wrapped for the typesetter
pub fn segments_to_html(segments: &[TextSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            TextSegment::Plain(text) => escape_html(text).replace('\n', "<br/>"),
            TextSegment::Math(tex) => format!("<span class=\"math\">{}</span>", escape_html(tex)),
        })
        .collect()
}
