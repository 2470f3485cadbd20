//! Bundle error types
//!
//! `BundleError` is the single error type for every bundle operation. The
//! variants follow the failure classes of the codec:
//!
//! | Class | Variants |
//! |-------|----------|
//! | Malformed input | `MissingDirective`, `DirectiveNotFound` |
//! | I/O failure | `Io`, `Archive` |
//! | Decode failure | `DirectiveEncode`, `DirectiveDecode` |
//! | Resolution failure | `UnresolvableModule` |
//! | Not found | `StaticFileNotFound`, `StaticFileVanished` |
//!
//! `StaticFileNotFound` is never wrapped in extra context so callers can
//! match on it directly (or use [`BundleError::is_not_found`]).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed source error produced by a [`Directive`](crate::Directive) implementation.
pub type DirectiveSourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All bundle errors.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Write was attempted without a directive
    #[error("directive must be provided")]
    MissingDirective,

    /// Archive was read but contains no `Directive.yaml` entry
    #[error("bundle did not contain directive: {}", path.display())]
    DirectiveNotFound {
        /// Archive that was read
        path: PathBuf,
    },

    /// Directive marshal step failed
    #[error("failed to marshal directive: {source}")]
    DirectiveEncode {
        /// Error reported by the directive implementation
        #[source]
        source: DirectiveSourceError,
    },

    /// Directive unmarshal step rejected the stored bytes
    #[error("failed to unmarshal directive: {source}")]
    DirectiveDecode {
        /// Error reported by the directive implementation
        #[source]
        source: DirectiveSourceError,
    },

    /// Filesystem I/O failed
    #[error("{context}: {source}")]
    Io {
        /// Stage and file that failed, e.g. "failed to read file a.wasm"
        context: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Archive container could not be opened, parsed or assembled
    #[error("{context}: {message}")]
    Archive {
        /// Stage and entry that failed
        context: String,
        /// Message from the archive library
        message: String,
    },

    /// Static file is not part of the bundle
    #[error("static file does not exist: {0}")]
    StaticFileNotFound(String),

    /// Static file is indexed but was not found when the archive was re-opened
    #[error("static file {0} is indexed but missing from the archive")]
    StaticFileVanished(String),

    /// Module reference has neither cached bytes nor a filepath
    #[error("missing Wasm module filepath in ref: {name}")]
    UnresolvableModule {
        /// Display name of the reference
        name: String,
    },
}

/// Result type for bundle operations.
pub type BundleResult<T> = std::result::Result<T, BundleError>;

impl BundleError {
    /// Create an I/O error with stage context
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BundleError::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error for a failed read of `path`
    pub fn read_file(path: &Path, source: io::Error) -> Self {
        Self::io(format!("failed to read file {}", path.display()), source)
    }

    /// Create an archive error from any displayable library error
    pub fn archive(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BundleError::Archive {
            context: context.into(),
            message: err.to_string(),
        }
    }

    /// Create a directive encode error
    pub fn directive_encode(source: impl Into<DirectiveSourceError>) -> Self {
        BundleError::DirectiveEncode {
            source: source.into(),
        }
    }

    /// Create a directive decode error
    pub fn directive_decode(source: impl Into<DirectiveSourceError>) -> Self {
        BundleError::DirectiveDecode {
            source: source.into(),
        }
    }

    /// Check if this is the static-file not-found condition.
    ///
    /// Only `StaticFileNotFound` qualifies; an I/O error whose kind happens
    /// to be `NotFound` (for example a deleted archive) does not.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BundleError::StaticFileNotFound(_))
    }

    /// Check if this error came from filesystem or archive I/O.
    pub fn is_io(&self) -> bool {
        matches!(self, BundleError::Io { .. } | BundleError::Archive { .. })
    }

    /// Check if this error means the input itself is malformed.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            BundleError::MissingDirective | BundleError::DirectiveNotFound { .. }
        )
    }
}
