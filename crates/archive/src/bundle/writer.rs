//! Bundle archive writer
//!
//! Assembles a directive, module files and static files into a `.wasm.zip`
//! archive. The whole archive is built in memory and only flushed to the
//! target path once it is complete, so a failed write never leaves a
//! partial bundle behind.
//!
//! Output is deterministic: entries are written in input order (directive,
//! modules, static files) with a fixed timestamp and fixed permissions.

use crate::bundle::types::{BundleWriteInfo, WriteOptions, ENTRY_MODE};
use std::fs::{self, OpenOptions};
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::{debug, info};
use wasmbundle_core::entry::{base_name, is_directive_alias, static_entry_name, DIRECTIVE_ENTRY};
use wasmbundle_core::{encode_directive, BundleError, BundleResult, Directive};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writer for bundle archives
pub struct BundleWriter {
    options: WriteOptions,
}

impl BundleWriter {
    /// Create a new writer
    pub fn new(options: &WriteOptions) -> Self {
        BundleWriter { options: *options }
    }

    /// Write a bundle to `target`
    ///
    /// Fails with [`BundleError::MissingDirective`] when `directive` is
    /// `None`; nothing is created at `target` in that case, or on any other
    /// error.
    pub fn write<D, M, S>(
        &self,
        directive: Option<&D>,
        modules: &[M],
        static_files: &[S],
        target: &Path,
    ) -> BundleResult<BundleWriteInfo>
    where
        D: Directive,
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        let (data, info) = self.write_to_vec(directive, modules, static_files)?;
        write_to_disk(target, &data, self.options.file_mode)?;

        info!(
            "Wrote bundle {} ({} modules, {} static files, {} bytes)",
            target.display(),
            info.module_count,
            info.static_count,
            info.bytes_written
        );

        Ok(info)
    }

    /// Assemble a complete bundle archive in memory
    pub fn write_to_vec<D, M, S>(
        &self,
        directive: Option<&D>,
        modules: &[M],
        static_files: &[S],
    ) -> BundleResult<(Vec<u8>, BundleWriteInfo)>
    where
        D: Directive,
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        let directive = directive.ok_or(BundleError::MissingDirective)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut info = BundleWriteInfo::default();

        let directive_bytes = encode_directive(directive)?;
        write_entry(&mut zip, DIRECTIVE_ENTRY, &directive_bytes)?;

        for path in modules {
            let path = path.as_ref();
            let file_name = base_name(path)?;

            // only the canonical directive passed in is allowed
            if is_directive_alias(&file_name) {
                debug!("Skipping {} (shadows {})", path.display(), DIRECTIVE_ENTRY);
                info.skipped.push(file_name);
                continue;
            }

            let contents = fs::read(path).map_err(|e| BundleError::read_file(path, e))?;
            write_entry(&mut zip, &file_name, &contents)?;
            info.module_count += 1;
        }

        for path in static_files {
            let path = path.as_ref();
            let entry_name = static_entry_name(&base_name(path)?);

            let contents = fs::read(path).map_err(|e| BundleError::read_file(path, e))?;
            write_entry(&mut zip, &entry_name, &contents)?;
            info.static_count += 1;
        }

        let data = zip
            .finish()
            .map_err(|e| BundleError::archive("failed to close bundle writer", e))?
            .into_inner();

        info.bytes_written = data.len() as u64;
        Ok((data, info))
    }
}

/// Write a bundle with default options
pub fn write_bundle<D, M, S>(
    directive: Option<&D>,
    modules: &[M],
    static_files: &[S],
    target: impl AsRef<Path>,
) -> BundleResult<BundleWriteInfo>
where
    D: Directive,
    M: AsRef<Path>,
    S: AsRef<Path>,
{
    BundleWriter::new(&WriteOptions::default()).write(
        directive,
        modules,
        static_files,
        target.as_ref(),
    )
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_MODE)
}

fn write_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    contents: &[u8],
) -> BundleResult<()> {
    zip.start_file(name, entry_options())
        .map_err(|e| BundleError::archive(format!("failed to add {} to bundle", name), e))?;
    zip.write_all(contents)
        .map_err(|e| BundleError::io(format!("failed to write {} into bundle", name), e))?;
    Ok(())
}

fn write_to_disk(target: &Path, data: &[u8], mode: u32) -> BundleResult<()> {
    let mut open_options = OpenOptions::new();
    open_options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open_options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let context = || format!("failed to write bundle to disk at {}", target.display());

    let mut file = open_options
        .open(target)
        .map_err(|e| BundleError::io(context(), e))?;
    file.write_all(data)
        .map_err(|e| BundleError::io(context(), e))?;
    file.sync_all().map_err(|e| BundleError::io(context(), e))?;

    Ok(())
}
