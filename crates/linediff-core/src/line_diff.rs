//! Line-level diff: classify every line of two texts as unchanged, removed,
//! or added.
//!
//! Lines are compared after normalization (see [`crate::text`]). Entry
//! content is the normalized line; line numbers are 1-based and index the
//! original texts, so a renderer can always fetch the unnormalized line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::char_diff::{compute_char_diff, CharDiffEntry};
use crate::lcs::{LcsTable, Step};
use crate::options::DiffOptions;
use crate::text::{normalize_lines, split_lines};

/// One classified line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditScriptEntry {
    /// The line is present in both texts.
    Unchanged {
        content: String,
        left_line: usize,
        right_line: usize,
    },
    /// The line is present only in the left text.
    Removed { content: String, left_line: usize },
    /// The line is present only in the right text.
    Added { content: String, right_line: usize },
}

impl EditScriptEntry {
    pub fn content(&self) -> &str {
        match self {
            Self::Unchanged { content, .. }
            | Self::Removed { content, .. }
            | Self::Added { content, .. } => content,
        }
    }

    /// 1-based line number in the left text, if the line exists there.
    pub fn left_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { left_line, .. } | Self::Removed { left_line, .. } => {
                Some(*left_line)
            }
            Self::Added { .. } => None,
        }
    }

    /// 1-based line number in the right text, if the line exists there.
    pub fn right_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { right_line, .. } | Self::Added { right_line, .. } => {
                Some(*right_line)
            }
            Self::Removed { .. } => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged { .. })
    }
}

/// Per-kind entry counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_entries(entries: &[EditScriptEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            match entry {
                EditScriptEntry::Unchanged { .. } => stats.unchanged += 1,
                EditScriptEntry::Removed { .. } => stats.removed += 1,
                EditScriptEntry::Added { .. } => stats.added += 1,
            }
        }
        stats
    }

    /// Number of rows in the script.
    pub fn total_lines(&self) -> usize {
        self.added + self.removed + self.unchanged
    }

    /// Returns `true` if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// The ordered classification of two texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    pub entries: Vec<EditScriptEntry>,
    pub stats: DiffStats,
}

impl EditScript {
    pub fn new(entries: Vec<EditScriptEntry>) -> Self {
        let stats = DiffStats::from_entries(&entries);
        Self { entries, stats }
    }

    /// Returns `true` if both texts were empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditScriptEntry> {
        self.entries.iter()
    }
}

/// Diff two texts line by line.
///
/// Total over all inputs. Memory and time are proportional to the product of
/// the two line counts; use [`crate::DiffEngine`] to bound that.
pub fn compute_line_diff(left: &str, right: &str, options: &DiffOptions) -> EditScript {
    let left_lines = normalize_lines(left, options);
    let right_lines = normalize_lines(right, options);
    diff_normalized(left_lines, right_lines)
}

pub(crate) fn diff_normalized(left_lines: Vec<String>, right_lines: Vec<String>) -> EditScript {
    let table = LcsTable::build(&left_lines, &right_lines, |a, b| a == b);
    debug!(
        left = left_lines.len(),
        right = right_lines.len(),
        lcs = table.lcs_len(),
        "built line LCS table"
    );
    let steps = table.backtrack(&left_lines, &right_lines, |a, b| a == b);

    let entries = steps
        .into_iter()
        .map(|step| match step {
            Step::Equal(i, j) => EditScriptEntry::Unchanged {
                content: left_lines[i].clone(),
                left_line: i + 1,
                right_line: j + 1,
            },
            Step::Delete(i) => EditScriptEntry::Removed {
                content: left_lines[i].clone(),
                left_line: i + 1,
            },
            Step::Insert(j) => EditScriptEntry::Added {
                content: right_lines[j].clone(),
                right_line: j + 1,
            },
        })
        .collect();

    EditScript::new(entries)
}

/// An unchanged entry whose original lines differ, with its character diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangedLinePair<'a> {
    /// Index of the entry in the script.
    pub index: usize,
    pub left: &'a str,
    pub right: &'a str,
    pub chars: Vec<CharDiffEntry>,
}

/// Find the `Unchanged` entries that only matched after normalization and
/// compute their character-level diffs on the original lines.
///
/// `left` and `right` must be the texts `script` was computed from. Each pair
/// builds its own character LCS table; [`crate::DiffEngine::changed_pairs`]
/// bounds those tables.
pub fn changed_line_pairs<'a>(
    script: &EditScript,
    left: &'a str,
    right: &'a str,
    options: &DiffOptions,
) -> Vec<ChangedLinePair<'a>> {
    let char_options = options.char_options();
    differing_originals(script, left, right)
        .into_iter()
        .map(|(index, l, r)| ChangedLinePair {
            index,
            left: l,
            right: r,
            chars: compute_char_diff(l, r, &char_options),
        })
        .collect()
}

/// `(entry index, left original, right original)` for every `Unchanged`
/// entry whose original lines differ.
pub(crate) fn differing_originals<'a>(
    script: &EditScript,
    left: &'a str,
    right: &'a str,
) -> Vec<(usize, &'a str, &'a str)> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);

    script
        .entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            EditScriptEntry::Unchanged {
                left_line,
                right_line,
                ..
            } => {
                let l = *left_lines.get(left_line.checked_sub(1)?)?;
                let r = *right_lines.get(right_line.checked_sub(1)?)?;
                (l != r).then_some((index, l, r))
            }
            _ => None,
        })
        .collect()
}
