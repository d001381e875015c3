//! JSON report of a comparison.

use linediff_core::{
    ChangedLinePair, CharDiffEntry, DiffOptions, DiffStats, EditScript, EditScriptEntry,
};
use serde::Serialize;

use crate::error::RenderResult;

/// Character diff attached to one unchanged entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangedLine {
    /// Index into `entries`.
    pub index: usize,
    pub left: String,
    pub right: String,
    pub chars: Vec<CharDiffEntry>,
}

/// Everything a client needs to render a comparison itself.
#[derive(Clone, Debug, Serialize)]
pub struct DiffReport<'a> {
    pub options: DiffOptions,
    pub stats: DiffStats,
    pub total_lines: usize,
    pub entries: &'a [EditScriptEntry],
    pub changed_lines: Vec<ChangedLine>,
}

impl<'a> DiffReport<'a> {
    /// Build a report from a script, the options it was computed with, and
    /// the character diffs of its normalized matches.
    pub fn new(
        script: &'a EditScript,
        options: &DiffOptions,
        pairs: &[ChangedLinePair<'_>],
    ) -> Self {
        let changed_lines = pairs
            .iter()
            .map(|pair| ChangedLine {
                index: pair.index,
                left: pair.left.to_owned(),
                right: pair.right.to_owned(),
                chars: pair.chars.clone(),
            })
            .collect();

        Self {
            options: *options,
            stats: script.stats,
            total_lines: script.stats.total_lines(),
            entries: &script.entries,
            changed_lines,
        }
    }

    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pretty JSON for a bare character diff.
pub fn char_diff_json(entries: &[CharDiffEntry]) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
