//! View-mode text expansion
//!
//! Free text shown in view mode gets a line break after every colon and
//! has its inline math markup separated out for typesetting. Edit mode
//! shows the raw text instead.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Inline math delimiters, tried in this order at each position
const MATH_DELIMITERS: [(&str, &str); 3] = [("$$", "$$"), ("\\(", "\\)"), ("$", "$")];

/// A run of view-mode text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum TextSegment {
    Plain(String),
    /// Math markup without its delimiters
    Math(String),
}

fn colon_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r":\s*").ok()).as_ref()
}

/// Replace each colon and the whitespace after it with a colon and a newline
pub fn break_after_colons(text: &str) -> String {
    match colon_pattern() {
        Some(re) => re.replace_all(text, ":\n").into_owned(),
        None => text.to_string(),
    }
}

/// Split text into plain and inline-math segments.
///
/// Recognizes `$...$`, `$$...$$` and `\(...\)`. An opening delimiter with
/// no matching close, or an empty body, stays plain text; `\$` is a literal
/// dollar sign.
pub fn split_inline_math(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("\\$") {
            plain.push('$');
            rest = after;
            continue;
        }

        let math = MATH_DELIMITERS.iter().find_map(|(open, close)| {
            let body = rest.strip_prefix(open)?;
            let end = body.find(close)?;
            Some((&body[..end], &body[end + close.len()..]))
        });

        match math {
            Some((body, after)) if !body.trim().is_empty() => {
                if !plain.is_empty() {
                    segments.push(TextSegment::Plain(std::mem::take(&mut plain)));
                }
                segments.push(TextSegment::Math(body.to_string()));
                rest = after;
            }
            _ => {
                plain.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !plain.is_empty() {
        segments.push(TextSegment::Plain(plain));
    }
    segments
}

/// Full view-mode expansion: colon breaks, then math splitting
pub fn expand_view_text(text: &str) -> Vec<TextSegment> {
    split_inline_math(&break_after_colons(text))
}
