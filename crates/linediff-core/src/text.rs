//! Line splitting and normalization.
//!
//! An empty text has no lines. Any other text is split on `'\n'` and a
//! trailing `'\r'` is dropped from each piece, so `"a\n"` has two lines
//! (`"a"` and `""`). Normalization never changes the number of lines, which
//! keeps line numbers valid against the original text.

use std::borrow::Cow;

use crate::options::DiffOptions;

/// Split `text` into lines without copying.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Split `text` into the lines that are actually compared under `options`.
pub fn normalize_lines(text: &str, options: &DiffOptions) -> Vec<String> {
    let cased: Cow<'_, str> = if options.ignore_case {
        Cow::Owned(fold_case(text))
    } else {
        Cow::Borrowed(text)
    };

    split_lines(&cased)
        .into_iter()
        .map(|line| {
            if options.ignore_whitespace {
                collapse_whitespace(line)
            } else {
                line.to_owned()
            }
        })
        .collect()
}

/// Lowercase one character at a time.
///
/// Unlike `str::to_lowercase` this ignores context (a word-final capital
/// sigma becomes `σ`, not `ς`), so it agrees with the per-character
/// comparison in [`crate::char_diff`].
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
