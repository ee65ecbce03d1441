//! Process-wide registry instance.
//!
//! Installed once during startup, before the host accepts editor requests,
//! and read for the rest of the process lifetime.

use std::sync::OnceLock;

use crate::error::RegistryError;
use crate::registry::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Install a sealed registry as the process-wide instance.
///
/// # Errors
///
/// Returns `RegistryError::AlreadyInstalled` if one is already installed.
pub fn install(registry: Registry) -> Result<&'static Registry, RegistryError> {
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    REGISTRY.get().ok_or(RegistryError::AlreadyInstalled)
}

/// The process-wide registry, if installed.
#[must_use]
pub fn global() -> Option<&'static Registry> {
    REGISTRY.get()
}

/// Return the installed registry, building and installing it first if needed.
///
/// Call this during startup from a single thread. Concurrent first calls
/// may each run `build`; only one result is installed and every caller gets
/// that one. If `build` fails, nothing is installed.
///
/// # Errors
///
/// Propagates any error from `build`.
pub fn get_or_install_with<F>(build: F) -> Result<&'static Registry, RegistryError>
where
    F: FnOnce() -> Result<Registry, RegistryError>,
{
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = build()?;
    Ok(REGISTRY.get_or_init(|| registry))
}
