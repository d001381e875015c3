//! Colored terminal output.

use colored::Colorize;
use linediff_core::DiffStats;

use crate::segment::Segment;
use crate::view::{Cell, InlineRow, RowKind, SideBySideRow};

/// Writes diff views as terminal text, with or without ANSI colors.
#[derive(Clone, Copy, Debug)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, kind: RowKind, emphasized: bool) -> String {
        if !self.color {
            return text.to_owned();
        }
        let styled = match kind {
            RowKind::Unchanged => text.normal(),
            RowKind::Removed => text.red(),
            RowKind::Added => text.green(),
        };
        let styled = if emphasized {
            match kind {
                RowKind::Removed => styled.on_bright_red().bold(),
                RowKind::Added => styled.on_bright_green().bold(),
                RowKind::Unchanged => styled.bold(),
            }
        } else {
            styled
        };
        styled.to_string()
    }

    fn paint_segments(&self, segments: &[Segment], kind: RowKind, emphasis: RowKind) -> String {
        segments
            .iter()
            .map(|s| {
                if s.emphasized {
                    self.paint(&s.text, emphasis, true)
                } else {
                    self.paint(&s.text, kind, false)
                }
            })
            .collect()
    }

    pub fn stats(&self, stats: &DiffStats) -> String {
        let added = format!("Added: {}", stats.added);
        let removed = format!("Removed: {}", stats.removed);
        format!(
            "{}  {}  Unchanged: {}  Total lines: {}",
            self.paint(&added, RowKind::Added, false),
            self.paint(&removed, RowKind::Removed, false),
            stats.unchanged,
            stats.total_lines()
        )
    }

    /// One line per row: line number, sign, text.
    pub fn inline(&self, rows: &[InlineRow]) -> String {
        let width = number_width(rows.iter().map(|r| r.line));
        let mut out = String::new();
        for row in rows {
            let line = format!("{:>width$} {} {}", row.line, sign(row.kind), row.text);
            out.push_str(&self.paint(&line, row.kind, false));
            out.push('\n');
        }
        out
    }

    /// Two columns separated by a bar. Emphasized characters are
    /// highlighted inside unchanged rows.
    pub fn side_by_side(&self, rows: &[SideBySideRow]) -> String {
        let width = number_width(
            rows.iter()
                .flat_map(|r| r.left.iter().chain(r.right.iter()))
                .map(|c| c.line),
        );
        let column = rows
            .iter()
            .filter_map(|r| r.left.as_ref())
            .map(|c| c.text().chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for row in rows {
            let (left, left_len) = self.cell(row.left.as_ref(), row.kind, RowKind::Removed, width);
            let (right, _) = self.cell(row.right.as_ref(), row.kind, RowKind::Added, width);
            let pad = " ".repeat((column + width + 1).saturating_sub(left_len));
            out.push_str(&format!("{left}{pad} | {right}"));
            out.push('\n');
        }
        out
    }

    /// Returns the painted cell and its visible width.
    fn cell(
        &self,
        cell: Option<&Cell>,
        kind: RowKind,
        emphasis: RowKind,
        width: usize,
    ) -> (String, usize) {
        match cell {
            Some(cell) => {
                let number = format!("{:>width$} ", cell.line);
                let text = self.paint_segments(&cell.segments, kind, emphasis);
                let visible = number.len() + cell.text().chars().count();
                (format!("{}{}", self.paint(&number, kind, false), text), visible)
            }
            None => (String::new(), 0),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn sign(kind: RowKind) -> char {
    match kind {
        RowKind::Unchanged => ' ',
        RowKind::Removed => '-',
        RowKind::Added => '+',
    }
}

fn number_width(lines: impl Iterator<Item = usize>) -> usize {
    lines.max().unwrap_or(0).to_string().len()
}
