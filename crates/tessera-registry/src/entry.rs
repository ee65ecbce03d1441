//! Component definitions and registry entries.

use serde::Serialize;
use tessera_core::{
    DefaultsRecord, OverrideRecord, PropsView, ResolvedProps, ViewNode, resolve, to_record,
};
use tessera_schema::{ComponentMeta, ComponentSchema, Properties};

use crate::error::RegistryError;

/// A pure renderer from resolved props to a view tree.
pub type Renderer = fn(&PropsView<'_>) -> ViewNode;

/// A visual component: typed defaults, a field schema, and a renderer.
pub trait Component {
    /// Typed props; `Default` yields the canonical sample values.
    type Props: Serialize + Default;

    fn meta() -> ComponentMeta;

    /// Root fields, in editor order.
    fn properties() -> Properties;

    fn render(props: &PropsView<'_>) -> ViewNode;
}

/// One row of the registry. Immutable once built.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    meta: ComponentMeta,
    properties: Properties,
    defaults: DefaultsRecord,
    renderer: Renderer,
}

impl RegistryEntry {
    /// Build an entry from parts. Shape is checked when it is registered.
    #[must_use]
    pub const fn new(
        meta: ComponentMeta,
        properties: Properties,
        defaults: DefaultsRecord,
        renderer: Renderer,
    ) -> Self {
        Self {
            meta,
            properties,
            defaults,
            renderer,
        }
    }

    /// Build an entry from a [`Component`] implementation.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Defaults` if the typed defaults do not
    /// serialize to a JSON object.
    pub fn of<C: Component>() -> Result<Self, RegistryError> {
        let meta = C::meta();
        let defaults = to_record(&C::Props::default()).map_err(|source| {
            RegistryError::Defaults {
                name: meta.name.clone(),
                source,
            }
        })?;
        Ok(Self::new(meta, C::properties(), defaults, C::render))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.meta.group
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.meta.description
    }

    #[must_use]
    pub const fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    #[must_use]
    pub const fn defaults(&self) -> &DefaultsRecord {
        &self.defaults
    }

    /// Merge an override onto this component's defaults.
    #[must_use]
    pub fn resolve(&self, overrides: &OverrideRecord) -> ResolvedProps {
        resolve(&self.defaults, overrides)
    }

    /// Resolve and render in one step.
    #[must_use]
    pub fn render(&self, overrides: &OverrideRecord) -> ViewNode {
        let resolved = self.resolve(overrides);
        (self.renderer)(&PropsView::new(&resolved, &self.defaults))
    }

    /// The editor-facing schema document.
    #[must_use]
    pub fn schema(&self) -> ComponentSchema {
        ComponentSchema::new(&self.meta, &self.properties)
    }
}
