//! Row models for the inline and side-by-side views.
//!
//! Rows always show the original, unnormalized lines. The line diff itself
//! only decides which rows exist and how they are classified.

use std::collections::HashMap;

use linediff_core::{split_lines, ChangedLinePair, EditScript, EditScriptEntry};
use serde::Serialize;
use tracing::debug;

use crate::segment::{emphasis_segments, segments_text, Segment};

/// How an edit script is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// One column, each line once.
    #[default]
    Inline,
    /// Left and right text in two columns.
    SideBySide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Unchanged,
    Removed,
    Added,
}

impl From<&EditScriptEntry> for RowKind {
    fn from(entry: &EditScriptEntry) -> Self {
        match entry {
            EditScriptEntry::Unchanged { .. } => Self::Unchanged,
            EditScriptEntry::Removed { .. } => Self::Removed,
            EditScriptEntry::Added { .. } => Self::Added,
        }
    }
}

/// A row of the inline view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InlineRow {
    pub kind: RowKind,
    /// Left line number for removed and unchanged rows, right otherwise.
    pub line: usize,
    pub text: String,
}

/// One side of a side-by-side row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub line: usize,
    pub segments: Vec<Segment>,
}

impl Cell {
    fn plain(line: usize, text: &str) -> Self {
        Self {
            line,
            segments: vec![Segment::plain(text)],
        }
    }

    pub fn text(&self) -> String {
        segments_text(&self.segments)
    }

    pub fn has_emphasis(&self) -> bool {
        self.segments.iter().any(|s| s.emphasized)
    }
}

/// A row of the side-by-side view. `left` is empty for added lines and
/// `right` for removed ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideBySideRow {
    pub kind: RowKind,
    pub left: Option<Cell>,
    pub right: Option<Cell>,
}

struct OriginalLines<'a> {
    left: Vec<&'a str>,
    right: Vec<&'a str>,
}

impl<'a> OriginalLines<'a> {
    fn new(left: &'a str, right: &'a str) -> Self {
        Self {
            left: split_lines(left),
            right: split_lines(right),
        }
    }

    fn left(&self, line: usize, fallback: &'a str) -> &'a str {
        line.checked_sub(1)
            .and_then(|i| self.left.get(i).copied())
            .unwrap_or(fallback)
    }

    fn right(&self, line: usize, fallback: &'a str) -> &'a str {
        line.checked_sub(1)
            .and_then(|i| self.right.get(i).copied())
            .unwrap_or(fallback)
    }
}

/// Lay out `script` as a single column.
///
/// `left` and `right` must be the texts the script was computed from.
pub fn inline_rows(script: &EditScript, left: &str, right: &str) -> Vec<InlineRow> {
    let originals = OriginalLines::new(left, right);

    script
        .iter()
        .map(|entry| {
            let (line, text) = match entry {
                EditScriptEntry::Unchanged {
                    content, left_line, ..
                }
                | EditScriptEntry::Removed { content, left_line } => {
                    (*left_line, originals.left(*left_line, content))
                }
                EditScriptEntry::Added {
                    content,
                    right_line,
                } => (*right_line, originals.right(*right_line, content)),
            };
            InlineRow {
                kind: entry.into(),
                line,
                text: text.to_owned(),
            }
        })
        .collect()
}

/// Lay out `script` as two columns, with character emphasis on unchanged
/// rows whose original lines differ.
///
/// `pairs` are the character diffs for those rows, usually from
/// [`linediff_core::DiffEngine::changed_pairs`]. Unchanged rows without a
/// pair are shown plain.
pub fn side_by_side_rows(
    script: &EditScript,
    left: &str,
    right: &str,
    pairs: &[ChangedLinePair<'_>],
) -> Vec<SideBySideRow> {
    let originals = OriginalLines::new(left, right);
    let mut pairs: HashMap<usize, &ChangedLinePair<'_>> =
        pairs.iter().map(|pair| (pair.index, pair)).collect();
    debug!(changed = pairs.len(), "side-by-side emphasis pairs");

    script
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            EditScriptEntry::Unchanged {
                content,
                left_line,
                right_line,
            } => {
                let (left_cell, right_cell) = match pairs.remove(&index) {
                    Some(pair) => {
                        let (l, r) = emphasis_segments(&pair.chars, pair.right);
                        (
                            Cell {
                                line: *left_line,
                                segments: l,
                            },
                            Cell {
                                line: *right_line,
                                segments: r,
                            },
                        )
                    }
                    None => (
                        Cell::plain(*left_line, originals.left(*left_line, content)),
                        Cell::plain(*right_line, originals.right(*right_line, content)),
                    ),
                };
                SideBySideRow {
                    kind: RowKind::Unchanged,
                    left: Some(left_cell),
                    right: Some(right_cell),
                }
            }
            EditScriptEntry::Removed { content, left_line } => SideBySideRow {
                kind: RowKind::Removed,
                left: Some(Cell::plain(*left_line, originals.left(*left_line, content))),
                right: None,
            },
            EditScriptEntry::Added {
                content,
                right_line,
            } => SideBySideRow {
                kind: RowKind::Added,
                left: None,
                right: Some(Cell::plain(*right_line, originals.right(*right_line, content))),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linediff_core::{changed_line_pairs, compute_line_diff, DiffOptions};

    #[test]
    fn inline_uses_original_text_and_side_numbers() {
        let left = "Keep\nDrop";
        let right = "keep\nNew";
        let opts = DiffOptions::new().ignore_case(true);
        let script = compute_line_diff(left, right, &opts);
        let rows = inline_rows(&script, left, right);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, RowKind::Unchanged);
        assert_eq!(rows[0].text, "Keep");
        assert_eq!((rows[1].kind, rows[1].line, rows[1].text.as_str()), (RowKind::Removed, 2, "Drop"));
        assert_eq!((rows[2].kind, rows[2].line, rows[2].text.as_str()), (RowKind::Added, 2, "New"));
    }

    #[test]
    fn side_by_side_blank_sides() {
        let script = compute_line_diff("A\nB\nC\nD", "A\nB\nX\nD", &DiffOptions::default());
        let rows = side_by_side_rows(&script, "A\nB\nC\nD", "A\nB\nX\nD", &[]);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].kind, RowKind::Removed);
        assert!(rows[2].right.is_none());
        assert_eq!(rows[2].left.as_ref().map(Cell::text).as_deref(), Some("C"));
        assert_eq!(rows[3].kind, RowKind::Added);
        assert!(rows[3].left.is_none());
        assert_eq!(rows[3].right.as_ref().map(|c| c.line), Some(3));
        assert!(rows.iter().flat_map(|r| r.left.iter().chain(r.right.iter())).all(|c| !c.has_emphasis()));
    }

    #[test]
    fn side_by_side_emphasizes_normalized_matches() {
        let left = "let  x = 1;";
        let right = "let x = 1;";
        let opts = DiffOptions::new().ignore_whitespace(true);
        let script = compute_line_diff(left, right, &opts);
        let pairs = changed_line_pairs(&script, left, right, &opts);
        let rows = side_by_side_rows(&script, left, right, &pairs);

        assert_eq!(rows.len(), 1);
        let l = rows[0].left.as_ref().unwrap();
        let r = rows[0].right.as_ref().unwrap();
        assert_eq!(l.text(), "let  x = 1;");
        assert_eq!(r.text(), "let x = 1;");
        assert!(l.has_emphasis());
        assert!(!r.has_emphasis());
    }

    #[test]
    fn empty_script_has_no_rows() {
        let script = compute_line_diff("", "", &DiffOptions::default());
        assert!(inline_rows(&script, "", "").is_empty());
        assert!(side_by_side_rows(&script, "", "", &[]).is_empty());
    }

    #[test]
    fn unchanged_rows_without_a_pair_stay_plain() {
        let left = "Same\nLOUD";
        let right = "Same\nloud";
        let opts = DiffOptions::new().ignore_case(true);
        let script = compute_line_diff(left, right, &opts);

        let rows = side_by_side_rows(&script, left, right, &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].left.as_ref().map(Cell::text).as_deref(), Some("LOUD"));
        assert_eq!(rows[1].right.as_ref().map(Cell::text).as_deref(), Some("loud"));
        assert!(!rows[1].left.as_ref().is_some_and(Cell::has_emphasis));
    }
}
