//! HTML tables for both views.
//!
//! All user text goes through [`escape_html`]; nothing from the compared
//! texts is ever interpolated raw.

use linediff_core::DiffStats;

use crate::segment::Segment;
use crate::view::{Cell, InlineRow, RowKind, SideBySideRow};

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn row_class(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Unchanged => "diff-unchanged",
        RowKind::Removed => "diff-removed",
        RowKind::Added => "diff-added",
    }
}

/// Summary counts as a `<div>`.
pub fn stats_html(stats: &DiffStats) -> String {
    format!(
        "<div class=\"diff-stats\"><span class=\"diff-stat-added\">Added: {}</span> \
         <span class=\"diff-stat-removed\">Removed: {}</span> \
         <span class=\"diff-stat-unchanged\">Unchanged: {}</span> \
         <span class=\"diff-stat-total\">Total lines: {}</span></div>\n",
        stats.added,
        stats.removed,
        stats.unchanged,
        stats.total_lines()
    )
}

/// Render the inline view.
pub fn inline_table(rows: &[InlineRow]) -> String {
    let mut out = String::from(
        "<table class=\"diff diff-inline\">\n<thead><tr><th>Line</th><th>Content</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        out.push_str(&format!(
            "<tr class=\"{}\"><td class=\"diff-line-number\">{}</td><td class=\"diff-content\">{}</td></tr>\n",
            row_class(row.kind),
            row.line,
            escape_html(&row.text)
        ));
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn segments_html(segments: &[Segment], emphasis_class: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.emphasized {
            out.push_str(&format!(
                "<span class=\"{emphasis_class}\">{}</span>",
                escape_html(&segment.text)
            ));
        } else {
            out.push_str(&escape_html(&segment.text));
        }
    }
    out
}

fn cell_html(cell: Option<&Cell>, class: &str, emphasis_class: &str) -> String {
    match cell {
        Some(cell) => format!(
            "<td class=\"diff-line-number {class}\">{}</td><td class=\"diff-content {class}\">{}</td>",
            cell.line,
            segments_html(&cell.segments, emphasis_class)
        ),
        None => "<td class=\"diff-line-number diff-blank\"></td><td class=\"diff-content diff-blank\">&nbsp;</td>"
            .to_string(),
    }
}

/// Render the side-by-side view.
pub fn side_by_side_table(rows: &[SideBySideRow]) -> String {
    let mut out = String::from(
        "<table class=\"diff diff-side-by-side\">\n<thead><tr><th>Line</th><th>Text 1</th><th>Line</th><th>Text 2</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let class = row_class(row.kind);
        out.push_str("<tr>");
        out.push_str(&cell_html(row.left.as_ref(), class, "diff-char-removed"));
        out.push_str(&cell_html(row.right.as_ref(), class, "diff-char-added"));
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}
