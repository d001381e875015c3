//! Error types for the diff engine.

/// Errors that can occur when running a bounded diff or loading its config.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The LCS table for the inputs would exceed the configured cell limit.
    #[error("inputs too large to diff: table needs {cells} cells, limit is {limit}")]
    TooLarge { cells: u64, limit: u64 },

    /// The engine configuration could not be parsed.
    #[error("invalid engine config: {0}")]
    Config(String),

    /// The engine configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
