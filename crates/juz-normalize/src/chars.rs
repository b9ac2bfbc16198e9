//! Character swapping and stripping inside one text field per item.

use serde_json::Value;
use tracing::trace;

use crate::field::FieldPath;

/// Ornate left parenthesis (﴾).
pub const ORNATE_LEFT_PAREN: char = '\u{FD3E}';
/// Ornate right parenthesis (﴿).
pub const ORNATE_RIGHT_PAREN: char = '\u{FD3F}';

/// Characters removed by the default strip transform.
pub const DEFAULT_STRIP_CHARS: &str = "\u{FD3F}\u{FD3E}()";

/// A fixed character substitution or deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharTransform {
    /// Each pair is exchanged in both directions at once.
    Swap(Vec<(char, char)>),
    /// Listed characters are deleted.
    Strip(Vec<char>),
}

impl CharTransform {
    /// Flip the ornate Qur'anic brackets: ﴿ becomes ﴾ and ﴾ becomes ﴿.
    pub fn ornate_bracket_swap() -> Self {
        Self::Swap(vec![(ORNATE_RIGHT_PAREN, ORNATE_LEFT_PAREN)])
    }

    pub fn strip(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set: Vec<char> = chars.into_iter().collect();
        set.sort_unstable();
        set.dedup();
        Self::Strip(set)
    }

    /// Apply to `text`, returning the new text and how many characters changed.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut changed = 0;
        let mut output = String::with_capacity(text.len());
        match self {
            Self::Swap(pairs) => {
                for c in text.chars() {
                    match swap_partner(pairs, c) {
                        Some(partner) => {
                            changed += 1;
                            output.push(partner);
                        }
                        None => output.push(c),
                    }
                }
            }
            Self::Strip(set) => {
                for c in text.chars() {
                    if set.contains(&c) {
                        changed += 1;
                    } else {
                        output.push(c);
                    }
                }
            }
        }
        (output, changed)
    }
}

fn swap_partner(pairs: &[(char, char)], c: char) -> Option<char> {
    pairs.iter().find_map(|&(a, b)| {
        if c == a {
            Some(b)
        } else if c == b {
            Some(a)
        } else {
            None
        }
    })
}

/// Outcome of transforming one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub items_changed: usize,
    pub chars_changed: usize,
}

impl TransformReport {
    pub fn changed(&self) -> bool {
        self.chars_changed > 0
    }
}

/// Apply `transform` to the `field` string of every item in `document`.
///
/// Only that field is touched. Items without it, non-object items, and empty
/// strings are left alone.
pub fn transform_document(
    document: &mut Value,
    field: &FieldPath,
    transform: &CharTransform,
) -> TransformReport {
    let mut report = TransformReport::default();
    let Some(items) = document.get_mut("items").and_then(Value::as_array_mut) else {
        return report;
    };
    for (index, item) in items.iter_mut().enumerate() {
        let Some(text) = field.string_mut(item) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let (updated, changed) = transform.apply(text);
        if changed > 0 {
            trace!(index, changed, field = %field, "transformed item field");
            *text = updated;
            report.items_changed += 1;
            report.chars_changed += changed;
        }
    }
    report
}
