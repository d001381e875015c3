//! Character-level diff of a single pair of lines.
//!
//! Used to mark which characters differ inside lines the line diff already
//! considered unchanged. It never feeds back into line classification.

use serde::{Deserialize, Serialize};

use crate::lcs::{align, Step};
use crate::options::CharDiffOptions;

/// One classified character. Indices are 0-based char positions in the
/// original lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharDiffEntry {
    /// Matched on both sides. `content` is the left character.
    Unchanged {
        content: char,
        left_index: usize,
        right_index: usize,
    },
    Removed { content: char, left_index: usize },
    Added { content: char, right_index: usize },
}

impl CharDiffEntry {
    pub fn content(&self) -> char {
        match self {
            Self::Unchanged { content, .. }
            | Self::Removed { content, .. }
            | Self::Added { content, .. } => *content,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged { .. })
    }
}

/// Diff two lines character by character.
pub fn compute_char_diff(
    left_line: &str,
    right_line: &str,
    options: &CharDiffOptions,
) -> Vec<CharDiffEntry> {
    let left: Vec<char> = left_line.chars().collect();
    let right: Vec<char> = right_line.chars().collect();

    // Per-character folding, the same rule `text::fold_case` applies to lines.
    let steps = if options.ignore_case {
        align(&left, &right, |a, b| a.to_lowercase().eq(b.to_lowercase()))
    } else {
        align(&left, &right, |a, b| a == b)
    };

    steps
        .into_iter()
        .map(|step| match step {
            Step::Equal(i, j) => CharDiffEntry::Unchanged {
                content: left[i],
                left_index: i,
                right_index: j,
            },
            Step::Delete(i) => CharDiffEntry::Removed {
                content: left[i],
                left_index: i,
            },
            Step::Insert(j) => CharDiffEntry::Added {
                content: right[j],
                right_index: j,
            },
        })
        .collect()
}
