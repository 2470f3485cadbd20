//! Bundle - Directive, Wasm Modules and Static Assets in One Archive
//!
//! This module implements writing and reading of bundles.
//!
//! ## Archive Format
//!
//! Bundles are zip archives, conventionally named `<app>.wasm.zip`:
//!
//! ```text
//! <app>.wasm.zip
//! ├── Directive.yaml       # Marshaled directive (required)
//! ├── <module>.wasm        # Wasm modules, one entry per module
//! └── static/
//!     └── <file>           # Static assets
//! ```
//!
//! ## Usage
//!
//! Write a bundle:
//! ```ignore
//! let info = BundleWriter::new(&WriteOptions::default())
//!     .write(Some(&directive), &["build/hello.wasm"], &["public/index.html"], path)?;
//! ```
//!
//! Read it back:
//! ```ignore
//! let bundle: Bundle<AppDirective> = BundleReader::read(path)?;
//! let html = bundle.static_file("index.html")?;
//! ```
//!
//! ## Design Principles
//!
//! - **Complete**: A write produces a whole archive or nothing
//! - **Deterministic**: Same inputs produce identical archives
//! - **Eager modules**: Module bytes are loaded when the bundle is read
//! - **Lazy assets**: Static files are indexed on read, fetched on request

mod reader;
mod types;
mod writer;

pub use reader::{read_bundle, Bundle, BundleReader};
pub use types::{BundleWriteInfo, ReadOptions, WriteOptions, DEFAULT_FILE_MODE, ENTRY_MODE};
pub use writer::{write_bundle, BundleWriter};
