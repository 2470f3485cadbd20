//! Archive entry namespace
//!
//! Entry names alone decide the role of every file in a bundle:
//!
//! ```text
//! app.wasm.zip
//! ├── Directive.yaml        # the directive (required)
//! ├── hello.wasm            # a module
//! ├── fetch.wasm            # a module
//! ├── static/index.html     # a static asset, logical name "index.html"
//! └── README.md             # ignored
//! ```
//!
//! Rules are applied in order: exact directive name, then the `static/`
//! prefix, then the `.wasm` suffix. Everything else is ignored.

use crate::error::{BundleError, BundleResult};
use std::io;
use std::path::Path;

/// Entry name of the directive document
pub const DIRECTIVE_ENTRY: &str = "Directive.yaml";

/// File names that would shadow the canonical directive if written as modules
pub const DIRECTIVE_ALIASES: [&str; 2] = ["Directive.yaml", "Directive.yml"];

/// Prefix of static asset entries
pub const STATIC_PREFIX: &str = "static/";

/// Suffix of module entries
pub const MODULE_SUFFIX: &str = ".wasm";

/// Conventional bundle file extension (not validated)
pub const BUNDLE_EXTENSION: &str = "wasm.zip";

/// Role of one archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// The directive document
    Directive,
    /// A static asset with its logical name (prefix removed)
    Static(String),
    /// A binary module
    Module,
    /// Anything else
    Ignored,
}

impl EntryKind {
    /// Classify an entry by name
    pub fn classify(name: &str) -> EntryKind {
        if name == DIRECTIVE_ENTRY {
            return EntryKind::Directive;
        }

        if let Some(logical) = name.strip_prefix(STATIC_PREFIX) {
            // directory entries carry no bytes
            if logical.is_empty() || logical.ends_with('/') {
                return EntryKind::Ignored;
            }
            return EntryKind::Static(logical.to_string());
        }

        if name.ends_with(MODULE_SUFFIX) {
            return EntryKind::Module;
        }

        EntryKind::Ignored
    }
}

/// Entry name for a static asset's logical name
pub fn static_entry_name(logical: &str) -> String {
    format!("{}{}", STATIC_PREFIX, logical)
}

/// Strip the `static/` prefix from a requested static path, if present
pub fn strip_static_prefix(requested: &str) -> Option<&str> {
    requested.strip_prefix(STATIC_PREFIX)
}

/// Check whether a file name would shadow the directive entry
pub fn is_directive_alias(file_name: &str) -> bool {
    DIRECTIVE_ALIASES.contains(&file_name)
}

/// Base file name of a path (directory components stripped)
///
/// Fails for paths without a file name and for names that are not valid
/// UTF-8, since entry names are stored as UTF-8.
pub fn base_name(path: &Path) -> BundleResult<String> {
    let invalid = |reason: &str| {
        BundleError::io(
            format!("failed to read file {}", path.display()),
            io::Error::new(io::ErrorKind::InvalidInput, reason.to_string()),
        )
    };

    path.file_name()
        .ok_or_else(|| invalid("path has no file name"))?
        .to_str()
        .map(String::from)
        .ok_or_else(|| invalid("file name is not valid UTF-8"))
}

/// Logical module name: the entry's base name without `.wasm`
pub fn module_stem(name: &str) -> &str {
    let base = name.rsplit('/').next().unwrap_or(name);
    base.strip_suffix(MODULE_SUFFIX).unwrap_or(base)
}
