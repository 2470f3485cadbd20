//! Convenient imports for wasmbundle.
//!
//! ```ignore
//! use wasmbundle::prelude::*;
//!
//! let bundle: Bundle<serde_yaml::Value> = read_bundle("app.wasm.zip")?;
//! ```

// Reading and writing
pub use crate::{read_bundle, write_bundle, Bundle, BundleReader, BundleWriter};

// Configuration
pub use crate::{ReadOptions, WriteOptions};

// Core types
pub use crate::{Directive, ModuleRef};

// Error handling
pub use crate::{Error, Result};
