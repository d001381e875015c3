//! Line-level text diff engine.
//!
//! Classifies the lines of two texts as unchanged, removed, or added using a
//! longest-common-subsequence alignment, with optional case and whitespace
//! normalization, and computes character-level diffs for lines that only
//! matched after normalization.
//!
//! # Key Types
//!
//! - [`EditScript`] / [`EditScriptEntry`] / [`DiffStats`] -- Line-level result
//! - [`CharDiffEntry`] -- Character-level result for one pair of lines
//! - [`DiffOptions`] -- Case and whitespace normalization
//! - [`DiffEngine`] / [`EngineConfig`] -- Size-bounded entry point

pub mod char_diff;
pub mod config;
pub mod engine;
pub mod error;
pub mod lcs;
pub mod line_diff;
pub mod options;
pub mod text;

pub use char_diff::{compute_char_diff, CharDiffEntry};
pub use config::EngineConfig;
pub use engine::DiffEngine;
pub use error::{DiffError, DiffResult};
pub use lcs::{LcsTable, Step};
pub use line_diff::{
    changed_line_pairs, compute_line_diff, ChangedLinePair, DiffStats, EditScript,
    EditScriptEntry,
};
pub use options::{CharDiffOptions, DiffOptions};
pub use text::{fold_case, normalize_lines, split_lines};
