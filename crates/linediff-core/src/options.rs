//! Comparison options shared by the line and character diffs.

use serde::{Deserialize, Serialize};

/// Normalization applied to both texts before lines are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Collapse whitespace runs to one space and trim every line.
    pub ignore_whitespace: bool,
    /// Compare lowercased text.
    pub ignore_case: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_whitespace(mut self, on: bool) -> Self {
        self.ignore_whitespace = on;
        self
    }

    pub fn ignore_case(mut self, on: bool) -> Self {
        self.ignore_case = on;
        self
    }

    /// Returns `true` if neither option alters the compared text.
    pub fn is_exact(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }

    /// The subset of options that applies inside a single line.
    pub fn char_options(&self) -> CharDiffOptions {
        CharDiffOptions {
            ignore_case: self.ignore_case,
        }
    }
}

/// Options for the character-level diff of one pair of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharDiffOptions {
    pub ignore_case: bool,
}
