//! # tessera-registry
//!
//! The table of components an external page builder can place and edit.
//!
//! The registry moves through three states:
//!
//! ```text
//! Empty → Populating (RegistryBuilder::register) → Stable (Registry)
//! ```
//!
//! [`RegistryBuilder::seal`] consumes the builder, so there is no way back to
//! populating. A sealed [`Registry`] is immutable and `Sync`; lookups need
//! no locking. The process-wide instance is installed once through
//! [`install`] or [`get_or_install_with`] and read through [`global`].

mod builder;
mod entry;
mod error;
mod global;
mod registry;

pub use builder::RegistryBuilder;
pub use entry::{Component, RegistryEntry, Renderer};
pub use error::RegistryError;
pub use global::{get_or_install_with, global, install};
pub use registry::Registry;
pub use tessera_core::DuplicatePolicy;
