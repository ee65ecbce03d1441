//! # tessera-schema
//!
//! Declarative field schemas for Tessera sections.
//!
//! This crate provides:
//! - [`FieldSchema`]: the per-field shape description an external editor
//!   renders property UI from
//! - Shape checking of a section's defaults against its schema, via a
//!   JSON Schema projection and `jsonschema`
//! - [`ComponentSchema`]: the editor-facing export document, with a
//!   `schemars`-generated JSON Schema of its own
//!
//! ## Architecture
//!
//! Sections declare their schema with the [`FieldSchema`] shorthands. The
//! registry checks each section's defaults with [`check_defaults`] before
//! accepting it, and exports [`ComponentSchema`] documents to the editor.

mod error;
mod export;
mod field;
mod shape;

pub use error::SchemaError;
pub use export::{ComponentMeta, ComponentSchema, UiHint};
pub use field::{FieldKind, FieldSchema, Properties, object_json_schema};
pub use shape::{check_defaults, check_properties};
