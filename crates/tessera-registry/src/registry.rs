//! The stable, read-only registry.

use std::collections::HashMap;

use indexmap::IndexMap;
use tessera_core::{OverrideRecord, ViewNode};
use tessera_schema::ComponentSchema;

use crate::entry::RegistryEntry;

/// Sealed component table. Built by [`RegistryBuilder::seal`](crate::RegistryBuilder::seal).
#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub(crate) const fn new(entries: Vec<RegistryEntry>, index: HashMap<String, usize>) -> Self {
        Self { entries, index }
    }

    /// Get an entry by name. Returns `None` if not found.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RegistryEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// All entries in registration order.
    #[must_use]
    pub fn list(&self) -> &[RegistryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(RegistryEntry::name).collect()
    }

    /// Entries grouped by editor menu group, groups in order of first appearance.
    #[must_use]
    pub fn groups(&self) -> IndexMap<&str, Vec<&RegistryEntry>> {
        let mut groups: IndexMap<&str, Vec<&RegistryEntry>> = IndexMap::new();
        for entry in &self.entries {
            groups.entry(entry.group()).or_default().push(entry);
        }
        groups
    }

    /// Resolve and render a component. Returns `None` for an unknown name.
    #[must_use]
    pub fn render(&self, name: &str, overrides: &OverrideRecord) -> Option<ViewNode> {
        self.lookup(name).map(|entry| entry.render(overrides))
    }

    /// Editor schema documents for every entry, in registration order.
    #[must_use]
    pub fn export(&self) -> Vec<ComponentSchema> {
        self.entries.iter().map(RegistryEntry::schema).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
