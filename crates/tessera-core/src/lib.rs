//! # tessera-core
//!
//! Foundational types shared by every Tessera crate:
//! - Props records (defaults, overrides, resolved) and the shallow resolver
//! - [`PropsView`], the fallback-aware accessor renderers read props through
//! - [`ViewNode`], the element/text tree renderers produce
//! - [`Icon`], the closed set of icons a section can reference by name
//! - [`DuplicatePolicy`], how the registry treats a repeated component name

pub mod error;
pub mod icon;
pub mod policy;
pub mod props;
pub mod view;

pub use error::CoreError;
pub use icon::Icon;
pub use policy::DuplicatePolicy;
pub use props::{
    DefaultsRecord, Item, OverrideRecord, PropsView, ResolvedProps, override_from_value, resolve,
    resolve_as, to_record,
};
pub use view::{Element, ViewNode, el, text};
