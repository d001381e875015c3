//! Rendering for line diffs.
//!
//! Turns an [`linediff_core::EditScript`] into inline or side-by-side rows,
//! then into HTML, colored terminal text, or a JSON report. Markup and
//! escaping live here; the diff engine only produces structured data.

pub mod error;
pub mod html;
pub mod report;
pub mod segment;
pub mod terminal;
pub mod view;

pub use error::{RenderError, RenderResult};
pub use html::{escape_html, inline_table, side_by_side_table, stats_html};
pub use report::{char_diff_json, ChangedLine, DiffReport};
pub use segment::{emphasis_segments, Segment};
pub use terminal::TerminalRenderer;
pub use view::{inline_rows, side_by_side_rows, Cell, InlineRow, RowKind, SideBySideRow, ViewMode};

use linediff_core::{ChangedLinePair, EditScript};

/// Message shown instead of a table when both texts were empty.
pub const NOTHING_TO_COMPARE: &str = "Nothing to compare.";
/// Message shown under the table when no line was added or removed.
pub const NO_DIFFERENCES: &str = "No differences.";

/// Render a complete HTML fragment: stats followed by the chosen view.
///
/// `pairs` feed the side-by-side emphasis and are ignored by the inline view.
pub fn to_html(
    script: &EditScript,
    left: &str,
    right: &str,
    pairs: &[ChangedLinePair<'_>],
    view: ViewMode,
) -> String {
    if script.is_empty() {
        return format!("<p class=\"diff-empty\">{NOTHING_TO_COMPARE}</p>\n");
    }

    let mut out = stats_html(&script.stats);
    if !script.stats.has_changes() {
        out.push_str(&format!("<p class=\"diff-none\">{NO_DIFFERENCES}</p>\n"));
    }
    match view {
        ViewMode::Inline => out.push_str(&inline_table(&inline_rows(script, left, right))),
        ViewMode::SideBySide => out.push_str(&side_by_side_table(&side_by_side_rows(
            script, left, right, pairs,
        ))),
    }
    out
}

/// Render the chosen view for a terminal, followed by the stats line.
pub fn to_terminal(
    script: &EditScript,
    left: &str,
    right: &str,
    pairs: &[ChangedLinePair<'_>],
    view: ViewMode,
    renderer: TerminalRenderer,
) -> String {
    if script.is_empty() {
        return format!("{NOTHING_TO_COMPARE}\n");
    }

    let mut out = match view {
        ViewMode::Inline => renderer.inline(&inline_rows(script, left, right)),
        ViewMode::SideBySide => renderer.side_by_side(&side_by_side_rows(script, left, right, pairs)),
    };
    out.push('\n');
    out.push_str(&renderer.stats(&script.stats));
    out.push('\n');
    if !script.stats.has_changes() {
        out.push_str(NO_DIFFERENCES);
        out.push('\n');
    }
    out
}
