//! Bundle archive reader
//!
//! Reads `.wasm.zip` archives into a [`Bundle`]. Every entry is visited
//! once:
//! - `Directive.yaml` is read and unmarshaled
//! - `.wasm` modules are read into memory
//! - `static/` entries are only indexed by name
//!
//! Static bytes are fetched later by [`Bundle::static_file`], which opens
//! the archive again for each call.

use crate::bundle::types::ReadOptions;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use wasmbundle_core::entry::{static_entry_name, strip_static_prefix, EntryKind};
use wasmbundle_core::{decode_directive, BundleError, BundleResult, Directive, ModuleRef};
use zip::result::ZipError;
use zip::ZipArchive;

/// Reader for bundle archives
pub struct BundleReader;

impl BundleReader {
    /// Read a bundle with default options
    pub fn read<D: Directive>(path: impl AsRef<Path>) -> BundleResult<Bundle<D>> {
        Self::read_with_options(path, &ReadOptions::default())
    }

    /// Read a bundle
    ///
    /// Fails with [`BundleError::DirectiveNotFound`] if the archive has no
    /// `Directive.yaml`. A bundle without modules is valid.
    pub fn read_with_options<D: Directive>(
        path: impl AsRef<Path>,
        options: &ReadOptions,
    ) -> BundleResult<Bundle<D>> {
        let path = path.as_ref();
        let mut archive = open_archive(path)?;

        let mut directive = None;
        let mut modules = Vec::new();
        let mut static_files = BTreeSet::new();

        // classify by name; only directive and module entries are opened
        for index in 0..archive.len() {
            let name = archive
                .name_for_index(index)
                .map(str::to_string)
                .ok_or_else(|| {
                    BundleError::archive(
                        format!("failed to open entry {} of {}", index, path.display()),
                        "entry index out of range",
                    )
                })?;

            match EntryKind::classify(&name) {
                EntryKind::Directive => {
                    let bytes = read_entry_at(&mut archive, index, &name, path)?;
                    directive = Some(decode_directive::<D>(&bytes)?);
                }
                EntryKind::Static(logical) => {
                    debug!("Indexed static file {}", logical);
                    static_files.insert(logical);
                }
                EntryKind::Module => {
                    let bytes = read_entry_at(&mut archive, index, &name, path)?;
                    debug!("Loaded module {} ({} bytes)", name, bytes.len());
                    modules.push(ModuleRef::with_bytes(name, bytes));
                }
                EntryKind::Ignored => {
                    debug!("Ignoring bundle entry {}", name);
                }
            }
        }

        let directive = directive.ok_or_else(|| BundleError::DirectiveNotFound {
            path: path.to_path_buf(),
        })?;

        info!(
            "Read bundle {} ({} modules, {} static files)",
            path.display(),
            modules.len(),
            static_files.len()
        );

        Ok(Bundle {
            path: path.to_path_buf(),
            directive,
            modules,
            static_files,
            options: *options,
        })
    }
}

/// Read a bundle with default options
pub fn read_bundle<D: Directive>(path: impl AsRef<Path>) -> BundleResult<Bundle<D>> {
    BundleReader::read(path)
}

/// A parsed bundle: directive, modules and static file index
#[derive(Debug, Clone)]
pub struct Bundle<D> {
    path: PathBuf,
    directive: D,
    modules: Vec<ModuleRef>,
    static_files: BTreeSet<String>,
    options: ReadOptions,
}

impl<D> Bundle<D> {
    /// Path of the archive this bundle was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The bundle's directive
    pub fn directive(&self) -> &D {
        &self.directive
    }

    /// Module references, in archive order
    pub fn modules(&self) -> &[ModuleRef] {
        &self.modules
    }

    /// Find a module by entry name (`hello.wasm`) or stem (`hello`)
    pub fn module(&self, name: &str) -> Option<&ModuleRef> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .or_else(|| self.modules.iter().find(|m| m.stem() == name))
    }

    /// Take ownership of the module references
    pub fn into_modules(self) -> Vec<ModuleRef> {
        self.modules
    }

    /// Logical names of all static files, sorted
    pub fn static_files(&self) -> impl Iterator<Item = &str> {
        self.static_files.iter().map(String::as_str)
    }

    /// Whether a static file is part of the bundle
    pub fn has_static_file(&self, path: &str) -> bool {
        self.indexed_static(path).is_some()
    }

    /// Read a static file's bytes from the archive
    ///
    /// `path` is the logical name (`index.html`); a leading `static/` is
    /// accepted too. Unknown names fail with
    /// [`BundleError::StaticFileNotFound`] without touching the disk.
    ///
    /// `path` is first looked up as given, then with one `static/` prefix
    /// stripped. In an archive holding both `static/static/x` and
    /// `static/x`, a request for `static/x` returns the former.
    ///
    /// If the name is indexed but the re-opened archive no longer contains
    /// it, the result is empty bytes, or `StaticFileVanished` when the
    /// bundle was read with [`ReadOptions::strict`].
    pub fn static_file(&self, path: &str) -> BundleResult<Vec<u8>> {
        let logical = self
            .indexed_static(path)
            .ok_or_else(|| BundleError::StaticFileNotFound(path.to_string()))?;

        let mut archive = open_archive(&self.path)?;
        let entry_name = static_entry_name(logical);

        let result = match archive.by_name(&entry_name) {
            Ok(mut entry) => read_entry(&mut entry, &entry_name),
            Err(ZipError::FileNotFound) => self.vanished_static(logical),
            Err(e) => Err(BundleError::archive(
                format!("failed to open static file {}", entry_name),
                e,
            )),
        };
        result
    }

    fn indexed_static<'a>(&'a self, path: &'a str) -> Option<&'a str> {
        if self.static_files.contains(path) {
            return Some(path);
        }
        strip_static_prefix(path).filter(|logical| self.static_files.contains(*logical))
    }

    fn vanished_static(&self, logical: &str) -> BundleResult<Vec<u8>> {
        if self.options.strict_static_lookup {
            return Err(BundleError::StaticFileVanished(logical.to_string()));
        }

        warn!(
            "Static file {} is indexed but missing from {}, returning empty contents",
            logical,
            self.path.display()
        );
        Ok(Vec::new())
    }
}

fn open_archive(path: &Path) -> BundleResult<ZipArchive<BufReader<File>>> {
    let file = File::open(path)
        .map_err(|e| BundleError::io(format!("failed to open bundle {}", path.display()), e))?;

    ZipArchive::new(BufReader::new(file))
        .map_err(|e| BundleError::archive(format!("failed to open bundle {}", path.display()), e))
}

fn read_entry_at(
    archive: &mut ZipArchive<BufReader<File>>,
    index: usize,
    name: &str,
    path: &Path,
) -> BundleResult<Vec<u8>> {
    let mut entry = archive.by_index(index).map_err(|e| {
        BundleError::archive(
            format!("failed to open entry {} of {}", name, path.display()),
            e,
        )
    })?;
    read_entry(&mut entry, name)
}

fn read_entry(entry: &mut impl Read, name: &str) -> BundleResult<Vec<u8>> {
    let mut data = Vec::new();
    entry
        .read_to_end(&mut data)
        .map_err(|e| BundleError::io(format!("failed to read {} from bundle", name), e))?;
    Ok(data)
}
