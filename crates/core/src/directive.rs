//! Directive document contract
//!
//! The directive is the one configuration document of a bundle. Its schema
//! belongs to the engine that runs the modules, so the codec only needs to
//! turn it into bytes and back. Any type implementing [`Directive`] can be
//! stored under `Directive.yaml`.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct AppDirective { identifier: String, app_version: String }
//!
//! impl Directive for AppDirective {
//!     type Error = serde_yaml::Error;
//!
//!     fn marshal(&self) -> Result<Vec<u8>, Self::Error> {
//!         serde_yaml::to_string(self).map(String::into_bytes)
//!     }
//!
//!     fn unmarshal(bytes: &[u8]) -> Result<Self, Self::Error> {
//!         serde_yaml::from_slice(bytes)
//!     }
//! }
//! ```

use crate::error::{BundleError, BundleResult};

/// A document that can be stored as a bundle's directive.
pub trait Directive: Sized {
    /// Error produced by marshal and unmarshal
    type Error: std::error::Error + Send + Sync + 'static;

    /// Serialize the document to the bytes stored in the archive
    fn marshal(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize a document from bytes stored in the archive
    fn unmarshal(bytes: &[u8]) -> Result<Self, Self::Error>;
}

/// Untyped YAML document.
impl Directive for serde_yaml::Value {
    type Error = serde_yaml::Error;

    fn marshal(&self) -> Result<Vec<u8>, Self::Error> {
        serde_yaml::to_string(self).map(String::into_bytes)
    }

    fn unmarshal(bytes: &[u8]) -> Result<Self, Self::Error> {
        serde_yaml::from_slice(bytes)
    }
}

/// Marshal a directive, mapping failure into [`BundleError::DirectiveEncode`]
pub fn encode_directive<D: Directive>(directive: &D) -> BundleResult<Vec<u8>> {
    directive.marshal().map_err(BundleError::directive_encode)
}

/// Unmarshal a directive, mapping failure into [`BundleError::DirectiveDecode`]
pub fn decode_directive<D: Directive>(bytes: &[u8]) -> BundleResult<D> {
    D::unmarshal(bytes).map_err(BundleError::directive_decode)
}
