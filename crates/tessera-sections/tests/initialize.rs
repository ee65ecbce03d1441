use tessera_core::{DuplicatePolicy, OverrideRecord};
use tessera_sections::{SECTION_NAMES, initialize_registry};

// One test per binary: the registry is process-global.
#[test]
fn initialize_installs_once_and_serves_lookups() {
    assert!(tessera_registry::global().is_none());

    let first = initialize_registry(DuplicatePolicy::Reject).expect("first initialization");
    assert_eq!(first.len(), SECTION_NAMES.len());

    let second = initialize_registry(DuplicatePolicy::Overwrite).expect("second initialization");
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, tessera_registry::global().unwrap()));

    let cta = first.render("cta-section", &OverrideRecord::new()).unwrap();
    assert!(cta.text_content().contains("Find Matches"));
}
