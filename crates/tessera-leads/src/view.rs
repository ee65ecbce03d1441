//! Rendering the CTA section with a live [`LeadForm`].

use tessera_core::{OverrideRecord, PropsView, ViewNode};
use tessera_registry::Registry;
use tessera_sections::cta;

use crate::form::LeadForm;

/// Render the registered CTA section with `form`'s values and status.
///
/// The button reads [`crate::PROCESSING_LABEL`] and is disabled while a
/// submission is in flight; the last outcome is shown under it. Returns
/// `None` when the CTA section is not registered.
#[must_use]
pub fn render_cta(
    registry: &Registry,
    overrides: &OverrideRecord,
    form: &LeadForm,
) -> Option<ViewNode> {
    let entry = registry.lookup(cta::NAME)?;
    let resolved = entry.resolve(overrides);
    let props = PropsView::new(&resolved, entry.defaults());
    Some(cta::render_form(&props, &form.view_state()))
}
