//! Bounded entry point for callers that accept untrusted input sizes.

use tracing::{debug, warn};

use crate::char_diff::{compute_char_diff, CharDiffEntry};
use crate::config::EngineConfig;
use crate::error::{DiffError, DiffResult};
use crate::lcs::LcsTable;
use crate::line_diff::{diff_normalized, differing_originals, ChangedLinePair, EditScript};
use crate::options::DiffOptions;
use crate::text::normalize_lines;

/// A diff engine that applies one [`EngineConfig`] to every comparison.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    config: EngineConfig,
}

impl DiffEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn options(&self) -> &DiffOptions {
        &self.config.options
    }

    /// Diff two texts line by line, refusing inputs whose LCS table would
    /// exceed the configured cell limit.
    pub fn line_diff(&self, left: &str, right: &str) -> DiffResult<EditScript> {
        let left_lines = normalize_lines(left, &self.config.options);
        let right_lines = normalize_lines(right, &self.config.options);
        self.check_size(left_lines.len(), right_lines.len())?;

        let script = diff_normalized(left_lines, right_lines);
        debug!(
            added = script.stats.added,
            removed = script.stats.removed,
            unchanged = script.stats.unchanged,
            "line diff complete"
        );
        Ok(script)
    }

    /// Diff two lines character by character under the same limit.
    pub fn char_diff(&self, left_line: &str, right_line: &str) -> DiffResult<Vec<CharDiffEntry>> {
        self.check_size(left_line.chars().count(), right_line.chars().count())?;
        Ok(compute_char_diff(
            left_line,
            right_line,
            &self.config.options.char_options(),
        ))
    }

    /// Character diffs for the lines of `script` that only matched after
    /// normalization. Every pair is checked against the cell limit before
    /// its table is built.
    pub fn changed_pairs<'a>(
        &self,
        script: &EditScript,
        left: &'a str,
        right: &'a str,
    ) -> DiffResult<Vec<ChangedLinePair<'a>>> {
        differing_originals(script, left, right)
            .into_iter()
            .map(|(index, l, r)| {
                Ok(ChangedLinePair {
                    index,
                    left: l,
                    right: r,
                    chars: self.char_diff(l, r)?,
                })
            })
            .collect()
    }

    fn check_size(&self, left_len: usize, right_len: usize) -> DiffResult<()> {
        let cells = LcsTable::cell_count(left_len, right_len);
        if let Some(limit) = self.config.cell_limit() {
            if cells > limit {
                return Err(DiffError::TooLarge { cells, limit });
            }
        }
        if cells > self.config.warn_cells {
            warn!(
                left = left_len,
                right = right_len,
                cells,
                "large diff input; LCS table grows with the product of both lengths"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_diff::{compute_line_diff, EditScriptEntry};

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn matches_free_function() {
        let engine = DiffEngine::default();
        let left = "A\nB\nC\nD";
        let right = "A\nB\nX\nD";
        assert_eq!(
            engine.line_diff(left, right).unwrap(),
            compute_line_diff(left, right, &DiffOptions::default())
        );
    }

    #[test]
    fn applies_configured_options() {
        let engine = DiffEngine::new(
            EngineConfig::default().with_options(DiffOptions::new().ignore_case(true)),
        );
        let script = engine.line_diff("Hello", "hello").unwrap();
        assert_eq!(script.stats.unchanged, 1);

        let pairs = engine.changed_pairs(&script, "Hello", "hello").unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].chars.iter().all(|c| c.is_unchanged()));
    }

    #[test]
    fn refuses_oversized_input() {
        // 10 lines each side -> 11 * 11 = 121 cells.
        let engine = DiffEngine::new(EngineConfig::default().with_max_cells(100));
        let err = engine.line_diff(&lines(10), &lines(10)).unwrap_err();
        match err {
            DiffError::TooLarge { cells, limit } => {
                assert_eq!(cells, 121);
                assert_eq!(limit, 100);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }

        // 9 lines each side fits exactly.
        assert!(engine.line_diff(&lines(9), &lines(9)).is_ok());
    }

    #[test]
    fn permissive_never_refuses() {
        let mut config = EngineConfig::permissive();
        config.warn_cells = 1;
        let engine = DiffEngine::new(config);
        let script = engine.line_diff(&lines(50), &lines(40)).unwrap();
        assert_eq!(script.stats.unchanged, 40);
        assert_eq!(script.stats.removed, 10);
    }

    #[test]
    fn char_diff_is_bounded_too() {
        let engine = DiffEngine::new(EngineConfig::default().with_max_cells(10));
        assert!(matches!(
            engine.char_diff("abcdef", "abcdef"),
            Err(DiffError::TooLarge { cells: 49, .. })
        ));
        let entries = engine.char_diff("ab", "ac").unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn changed_pairs_respect_the_limit() {
        let engine = DiffEngine::new(
            EngineConfig::default()
                .with_options(DiffOptions::new().ignore_case(true))
                .with_max_cells(100),
        );
        let left = "A".repeat(200);
        let right = "a".repeat(200);

        // One line per side fits the line table easily.
        let script = engine.line_diff(&left, &right).unwrap();
        assert_eq!(script.stats.unchanged, 1);

        match engine.changed_pairs(&script, &left, &right) {
            Err(DiffError::TooLarge { cells, limit }) => {
                assert_eq!(cells, 201 * 201);
                assert_eq!(limit, 100);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }

        let unbounded = DiffEngine::new(engine.config().clone().with_max_cells(0));
        let pairs = unbounded.changed_pairs(&script, &left, &right).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].chars.len(), 200);
    }

    #[test]
    fn empty_inputs_always_fit() {
        let engine = DiffEngine::new(EngineConfig::default().with_max_cells(1));
        let script = engine.line_diff("", "").unwrap();
        assert!(script.is_empty());
        assert!(!script.iter().any(EditScriptEntry::is_unchanged));
    }
}
