//! Schema error types.

use thiserror::Error;

/// Errors from schema construction and defaults checking.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema tree itself is not well formed.
    #[error("Malformed schema at '{path}': {reason}")]
    Malformed {
        /// Slash-separated field path (e.g. `/benefits/items`).
        path: String,
        reason: String,
    },

    /// Defaults disagree with the schema (missing, extra, or mistyped fields).
    #[error("Defaults do not match schema: {errors:?}")]
    ShapeMismatch {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// The JSON Schema projection could not be compiled.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
