//! Error types for the render crate.

/// Errors that can occur while producing output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON encoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
