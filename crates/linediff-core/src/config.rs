//! Engine configuration: normalization options and LCS table size limits,
//! loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::options::DiffOptions;

/// Configuration for a [`crate::DiffEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Table size above which a warning is logged before diffing.
    pub warn_cells: u64,
    /// Table size above which the diff is refused. `0` disables the limit.
    pub max_cells: u64,
    /// Normalization applied to every comparison.
    pub options: DiffOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warn_cells: 4_000_000,
            max_cells: 100_000_000,
            options: DiffOptions::default(),
        }
    }
}

impl EngineConfig {
    /// A configuration with no size limit. Large inputs still log a warning.
    pub fn permissive() -> Self {
        Self {
            max_cells: 0,
            ..Default::default()
        }
    }

    /// The enforced cell limit, if any.
    pub fn cell_limit(&self) -> Option<u64> {
        (self.max_cells > 0).then_some(self.max_cells)
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> DiffResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn to_toml_string(&self) -> DiffResult<String> {
        toml::to_string_pretty(self).map_err(|e| DiffError::Config(e.to_string()))
    }
}
