//! Cross-cutting error types for Tessera.
//!
//! Domain-specific errors (`SchemaError`, `RegistryError`, `LeadError`) live
//! in their respective crates.

use thiserror::Error;

/// Errors raised while building or converting props records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record was expected to be a JSON object.
    #[error("Props record must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// Typed props could not be converted to or from a JSON record.
    #[error("Props conversion failed: {0}")]
    Conversion(#[from] serde_json::Error),
}
