//! Bundle options and write summaries

/// Permission bits of a written bundle file: owner read/write/execute
pub const DEFAULT_FILE_MODE: u32 = 0o700;

/// Permission bits recorded on each archive entry
pub const ENTRY_MODE: u32 = 0o644;

/// Options for writing a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Unix permission bits for the bundle file (ignored on other platforms)
    pub file_mode: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

impl WriteOptions {
    /// Set the permission bits of the written bundle file
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }
}

/// Options for reading a bundle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Fail with `StaticFileVanished` when an indexed static file is missing
    /// on re-open, instead of returning empty bytes
    pub strict_static_lookup: bool,
}

impl ReadOptions {
    /// Treat index/archive disagreement as an error
    pub fn strict() -> Self {
        ReadOptions {
            strict_static_lookup: true,
        }
    }
}

/// Summary of a bundle write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleWriteInfo {
    /// Module entries written
    pub module_count: usize,
    /// Static entries written
    pub static_count: usize,
    /// Module files dropped because they would shadow the directive
    pub skipped: Vec<String>,
    /// Size of the finished archive
    pub bytes_written: u64,
}
