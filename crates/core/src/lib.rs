//! Core types for Wasm bundles
//!
//! This crate defines the pieces shared by the bundle writer and reader:
//! - `Directive`: the opaque configuration document contract
//! - `EntryKind`: classification of archive entries by name
//! - `ModuleRef`: lazily resolvable handle to a module's bytes
//! - `BundleError`: the error taxonomy for every bundle operation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directive;
pub mod entry;
pub mod error;
pub mod module_ref;

pub use directive::{decode_directive, encode_directive, Directive};
pub use entry::{
    base_name, is_directive_alias, module_stem, static_entry_name, strip_static_prefix,
    EntryKind, BUNDLE_EXTENSION, DIRECTIVE_ALIASES, DIRECTIVE_ENTRY, MODULE_SUFFIX,
    STATIC_PREFIX,
};
pub use error::{BundleError, BundleResult, DirectiveSourceError};
pub use module_ref::ModuleRef;
