//! Default numbering for newly added questions and sub-questions
//!
//! Numbers are free text. These rules only suggest a default; nothing else
//! in the workspace assumes numbers are unique, numeric or monotonic.

use crate::Question;

/// Parse the leading integer of a number, the way a lenient integer parse
/// would: optional leading whitespace, an optional sign, then digits.
/// Anything after the digits is ignored ("7a" reads as 7). Digits that do
/// not fit in an `i64` read as no number at all.
pub fn leading_integer(number: &str) -> Option<i64> {
    let trimmed = number.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// Number for a question appended after `questions`: one past the last
/// question's leading integer, or "1" when there is no usable number.
/// A leading integer outside the `i64` range, or one whose successor
/// overflows, counts as unusable.
pub fn next_question_number(questions: &[Question]) -> String {
    questions
        .last()
        .and_then(|q| leading_integer(&q.number))
        .and_then(|n| n.checked_add(1))
        .map(|n| n.to_string())
        .unwrap_or_else(|| "1".to_string())
}

/// Letter for a sub-question appended after `count` existing ones: 0 → "a", 1 → "b".
///
/// Past "z" the sequence continues through the following code points.
pub fn sub_question_number(count: usize) -> String {
    u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_add('a' as u32))
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}
