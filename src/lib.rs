//! # wasmbundle
//!
//! A single-file container for Wasm applications.
//!
//! A bundle packages three things into one zip archive:
//! - the **directive**, a configuration document stored as `Directive.yaml`
//! - **modules**, Wasm binaries stored by file name (`hello.wasm`)
//! - **static files**, auxiliary assets stored under `static/`
//!
//! ## Quick Start
//!
//! ```ignore
//! use wasmbundle::prelude::*;
//!
//! // Write a bundle
//! write_bundle(
//!     Some(&directive),
//!     &["build/hello.wasm"],
//!     &["public/index.html"],
//!     "app.wasm.zip",
//! )?;
//!
//! // Read it back
//! let bundle: Bundle<AppDirective> = read_bundle("app.wasm.zip")?;
//! for module in bundle.modules() {
//!     let bytes = module.module_bytes()?;
//!     engine.load(module.name(), &bytes)?;
//! }
//! let html = bundle.static_file("index.html")?;
//! ```
//!
//! ## Loading Model
//!
//! - Module bytes are read when the bundle is read
//! - Static files are only indexed; each [`Bundle::static_file`] call
//!   re-opens the archive and reads one entry
//! - A [`ModuleRef`] built from a standalone path reads its file on first
//!   use and caches the bytes

#![warn(missing_docs)]

pub mod prelude;

// Codec
pub use wasmbundle_archive::{
    read_bundle, write_bundle, Bundle, BundleReader, BundleWriteInfo, BundleWriter, ReadOptions,
    WriteOptions,
};

// Core types
pub use wasmbundle_core::{
    Directive, EntryKind, ModuleRef, BUNDLE_EXTENSION, DIRECTIVE_ENTRY, MODULE_SUFFIX,
    STATIC_PREFIX,
};

// Error handling
pub use wasmbundle_core::{BundleError as Error, BundleResult as Result};
