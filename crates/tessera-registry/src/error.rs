//! Registry error types.

use tessera_core::CoreError;
use tessera_schema::SchemaError;
use thiserror::Error;

/// Errors raised while populating or installing the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A component's defaults and schema disagree; it was not registered.
    #[error("Component '{name}' has an invalid definition: {source}")]
    SchemaDefinition {
        name: String,
        #[source]
        source: SchemaError,
    },

    /// A component's typed defaults could not be turned into a record.
    #[error("Component '{name}' defaults could not be converted: {source}")]
    Defaults {
        name: String,
        #[source]
        source: CoreError,
    },

    /// The name is already taken and the policy keeps the first entry.
    #[error("Component name '{name}' is already registered")]
    Conflict { name: String },

    /// One or more components failed to register during initialization.
    #[error("Registry initialization failed: {failures:?}")]
    Incomplete { failures: Vec<String> },

    /// A process-wide registry is already installed.
    #[error("A process-wide registry is already installed")]
    AlreadyInstalled,
}

impl RegistryError {
    /// Whether the error leaves the registry usable (the first entry survives).
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
