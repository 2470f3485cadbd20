//! Archive codec for Wasm bundles
//!
//! This crate writes and reads bundle archives:
//! - `BundleWriter`: assembles directive, modules and static files into one archive
//! - `BundleReader`: classifies entries and builds a `Bundle`
//! - `Bundle`: directive, eager module references, lazy static files

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;

pub use bundle::{
    read_bundle, write_bundle, Bundle, BundleReader, BundleWriteInfo, BundleWriter, ReadOptions,
    WriteOptions,
};
