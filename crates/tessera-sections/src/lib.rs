//! # tessera-sections
//!
//! The landing-page sections Tessera ships, and the registration pass that
//! puts them in the registry.
//!
//! Each section module defines a marker type implementing
//! [`Component`](tessera_registry::Component), its typed props with sample
//! defaults, its field schema, and its renderer.
//!
//! # Usage
//!
//! ```no_run
//! use tessera_core::{DuplicatePolicy, OverrideRecord};
//!
//! let registry = tessera_sections::initialize_registry(DuplicatePolicy::Reject)
//!     .expect("built-in sections register cleanly");
//! let hero = registry.render("hero-section", &OverrideRecord::new());
//! assert!(hero.is_some());
//! ```

mod common;

pub mod benefits;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod pricing;
pub mod stats;
pub mod testimonials;

pub use benefits::BenefitsSection;
pub use common::LinkItem;
pub use cta::CtaSection;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use navigation::NavigationSection;
pub use pricing::PricingSection;
pub use stats::StatsSection;
pub use testimonials::TestimonialsSection;

use tessera_core::DuplicatePolicy;
use tessera_registry::{Registry, RegistryBuilder, RegistryError, get_or_install_with};

/// Names of every built-in section, in page order.
pub const SECTION_NAMES: [&str; 10] = [
    "navigation-section",
    "hero-section",
    "benefits-section",
    "features-section",
    "testimonials-section",
    "stats-section",
    "pricing-section",
    "faq-section",
    "cta-section",
    "footer-section",
];

/// Register every built-in section, in page order.
///
/// Returns the errors of the sections that did not register; the rest are
/// in the builder.
pub fn register_all(builder: &mut RegistryBuilder) -> Vec<RegistryError> {
    let results = [
        builder.register_component::<NavigationSection>(),
        builder.register_component::<HeroSection>(),
        builder.register_component::<BenefitsSection>(),
        builder.register_component::<FeaturesSection>(),
        builder.register_component::<TestimonialsSection>(),
        builder.register_component::<StatsSection>(),
        builder.register_component::<PricingSection>(),
        builder.register_component::<FaqSection>(),
        builder.register_component::<CtaSection>(),
        builder.register_component::<FooterSection>(),
    ];
    results.into_iter().filter_map(Result::err).collect()
}

/// Run the registration pass and seal the result.
///
/// Name conflicts are reported by the builder and do not fail the pass.
///
/// # Errors
///
/// Returns `RegistryError::Incomplete` if any section failed to register for
/// another reason (e.g. its defaults disagree with its schema).
pub fn build_registry(policy: DuplicatePolicy) -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new(policy);
    let failures: Vec<String> = register_all(&mut builder)
        .into_iter()
        .filter(|e| !e.is_conflict())
        .map(|e| {
            tracing::error!(%e, "section failed to register");
            e.to_string()
        })
        .collect();

    if !failures.is_empty() {
        return Err(RegistryError::Incomplete { failures });
    }
    Ok(builder.seal())
}

/// Build the built-in registry and install it process-wide.
///
/// Call once during startup, before serving editor requests. Later calls
/// return the registry installed by the first successful call.
///
/// # Errors
///
/// See [`build_registry`].
pub fn initialize_registry(policy: DuplicatePolicy) -> Result<&'static Registry, RegistryError> {
    get_or_install_with(|| build_registry(policy))
}
