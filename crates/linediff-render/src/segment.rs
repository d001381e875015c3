//! Emphasis segments for lines that differ only inside the line.

use linediff_core::CharDiffEntry;
use serde::Serialize;

/// A run of characters that share the same emphasis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    /// `true` for characters removed (left side) or added (right side).
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }
}

fn push_char(segments: &mut Vec<Segment>, c: char, emphasized: bool) {
    match segments.last_mut() {
        Some(last) if last.emphasized == emphasized => last.text.push(c),
        _ => segments.push(Segment {
            text: c.to_string(),
            emphasized,
        }),
    }
}

/// Split a character diff into left and right segment lists.
///
/// `right_line` is the original right line; unchanged characters on the
/// right side are taken from it so a case-insensitive match still shows the
/// right text as typed.
pub fn emphasis_segments(
    entries: &[CharDiffEntry],
    right_line: &str,
) -> (Vec<Segment>, Vec<Segment>) {
    let right_chars: Vec<char> = right_line.chars().collect();
    let mut left = Vec::new();
    let mut right = Vec::new();

    for entry in entries {
        match *entry {
            CharDiffEntry::Unchanged {
                content,
                right_index,
                ..
            } => {
                push_char(&mut left, content, false);
                let shown = right_chars.get(right_index).copied().unwrap_or(content);
                push_char(&mut right, shown, false);
            }
            CharDiffEntry::Removed { content, .. } => push_char(&mut left, content, true),
            CharDiffEntry::Added { content, .. } => push_char(&mut right, content, true),
        }
    }

    (left, right)
}

/// Concatenate segment text.
pub fn segments_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linediff_core::{compute_char_diff, CharDiffOptions};

    fn seg(text: &str, emphasized: bool) -> Segment {
        Segment {
            text: text.into(),
            emphasized,
        }
    }

    #[test]
    fn runs_are_merged() {
        let entries = compute_char_diff("hello world", "hello there", &CharDiffOptions::default());
        let (left, right) = emphasis_segments(&entries, "hello there");

        assert_eq!(segments_text(&left), "hello world");
        assert_eq!(segments_text(&right), "hello there");
        assert_eq!(left[0], seg("hello ", false));
        assert_eq!(right[0], seg("hello ", false));
        assert!(left.iter().any(|s| s.emphasized));
        assert!(right.iter().any(|s| s.emphasized));
        // Adjacent segments always alternate emphasis.
        assert!(left.windows(2).all(|w| w[0].emphasized != w[1].emphasized));
        assert!(right.windows(2).all(|w| w[0].emphasized != w[1].emphasized));
    }

    #[test]
    fn case_insensitive_keeps_each_side_as_typed() {
        let entries = compute_char_diff("Hello", "hELLO", &CharDiffOptions { ignore_case: true });
        let (left, right) = emphasis_segments(&entries, "hELLO");
        assert_eq!(left, vec![seg("Hello", false)]);
        assert_eq!(right, vec![seg("hELLO", false)]);
    }

    #[test]
    fn pure_insertion() {
        let entries = compute_char_diff("ac", "abc", &CharDiffOptions::default());
        let (left, right) = emphasis_segments(&entries, "abc");
        assert_eq!(left, vec![seg("ac", false)]);
        assert_eq!(right, vec![seg("a", false), seg("b", true), seg("c", false)]);
    }

    #[test]
    fn empty_diff_has_no_segments() {
        let (left, right) = emphasis_segments(&[], "");
        assert!(left.is_empty());
        assert!(right.is_empty());
    }
}
