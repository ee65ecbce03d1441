//! The populating phase of the registry.

use std::collections::HashMap;

use tessera_core::DuplicatePolicy;
use tessera_schema::check_defaults;

use crate::entry::{Component, RegistryEntry};
use crate::error::RegistryError;
use crate::registry::Registry;

/// Accepts registrations until [`seal`](Self::seal) is called.
///
/// Registration must happen on one thread, before any lookup.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    policy: DuplicatePolicy,
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add an entry.
    ///
    /// The entry's defaults are checked against its schema first; a
    /// mismatching entry is never registered. On a duplicate name,
    /// [`DuplicatePolicy::Reject`] keeps the first entry and reports a
    /// conflict, [`DuplicatePolicy::Overwrite`] replaces it in place.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaDefinition` for a shape mismatch, or
    /// `RegistryError::Conflict` for a rejected duplicate.
    pub fn register(&mut self, entry: RegistryEntry) -> Result<(), RegistryError> {
        check_defaults(entry.properties(), entry.defaults()).map_err(|source| {
            RegistryError::SchemaDefinition {
                name: entry.name().to_string(),
                source,
            }
        })?;

        if let Some(&slot) = self.index.get(entry.name()) {
            return match self.policy {
                DuplicatePolicy::Reject => {
                    tracing::warn!(name = entry.name(), "duplicate component name rejected");
                    Err(RegistryError::Conflict {
                        name: entry.name().to_string(),
                    })
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(
                        name = entry.name(),
                        "duplicate component name overwrites earlier entry"
                    );
                    self.entries[slot] = entry;
                    Ok(())
                }
            };
        }

        tracing::debug!(name = entry.name(), group = entry.group(), "registered component");
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Register a [`Component`] implementation.
    ///
    /// # Errors
    ///
    /// See [`RegistryEntry::of`] and [`register`](Self::register).
    pub fn register_component<C: Component>(&mut self) -> Result<(), RegistryError> {
        self.register(RegistryEntry::of::<C>()?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End the populating phase.
    #[must_use]
    pub fn seal(self) -> Registry {
        tracing::info!(components = self.entries.len(), "registry sealed");
        Registry::new(self.entries, self.index)
    }
}
