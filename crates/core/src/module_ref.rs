//! Wasm module references
//!
//! A [`ModuleRef`] is a handle to one module's bytes. Bytes either come
//! from the archive (resolved at construction) or from a standalone file
//! that is read on first access and cached for the life of the reference.
//!
//! ## States
//!
//! ```text
//! Unresolved(path) ──module_bytes()──> Resolved(bytes)
//! Resolved(bytes)  ──module_bytes()──> Resolved(bytes)   (no I/O)
//! Unresolvable     ──module_bytes()──> error, every time
//! ```
//!
//! The transition happens under a lock, so concurrent callers read the file
//! at most once between them.

use crate::entry::{base_name, module_stem};
use crate::error::{BundleError, BundleResult};
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
enum ModuleState {
    Unresolved(PathBuf),
    Resolved(Arc<[u8]>),
    Unresolvable,
}

/// Reference to a Wasm module, by bytes or by filepath
pub struct ModuleRef {
    name: String,
    filepath: Option<PathBuf>,
    state: Mutex<ModuleState>,
}

impl ModuleRef {
    /// Reference backed by bytes already in memory
    pub fn with_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        ModuleRef {
            name: name.into(),
            filepath: None,
            state: Mutex::new(ModuleState::Resolved(bytes.into())),
        }
    }

    /// Reference to a standalone module file, read on first access
    ///
    /// The display name is the file name of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = base_name(&path).unwrap_or_else(|_| path.display().to_string());
        ModuleRef {
            name,
            filepath: Some(path.clone()),
            state: Mutex::new(ModuleState::Unresolved(path)),
        }
    }

    /// Reference with neither bytes nor a filepath
    ///
    /// Every call to [`module_bytes`](Self::module_bytes) fails.
    pub fn unresolved(name: impl Into<String>) -> Self {
        ModuleRef {
            name: name.into(),
            filepath: None,
            state: Mutex::new(ModuleState::Unresolvable),
        }
    }

    /// Display name (the archive entry name for bundled modules)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without directories or the `.wasm` suffix
    pub fn stem(&self) -> &str {
        module_stem(&self.name)
    }

    /// Standalone filepath, if this reference was built from one
    pub fn filepath(&self) -> Option<&Path> {
        self.filepath.as_deref()
    }

    /// Whether bytes are already in memory
    pub fn is_resolved(&self) -> bool {
        matches!(*self.state.lock(), ModuleState::Resolved(_))
    }

    /// Get the module's bytes, loading and caching them if needed
    ///
    /// A failed read leaves the reference unresolved, so a later call
    /// tries the file again.
    pub fn module_bytes(&self) -> BundleResult<Arc<[u8]>> {
        let mut state = self.state.lock();

        let path = match &*state {
            ModuleState::Resolved(bytes) => return Ok(Arc::clone(bytes)),
            ModuleState::Unresolvable => {
                return Err(BundleError::UnresolvableModule {
                    name: self.name.clone(),
                })
            }
            ModuleState::Unresolved(path) => path,
        };

        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|e| {
                BundleError::io(
                    format!("failed to read Wasm module {}", path.display()),
                    e,
                )
            })?
            .into();

        debug!(
            "Loaded module {} ({} bytes) from {}",
            self.name,
            bytes.len(),
            path.display()
        );

        *state = ModuleState::Resolved(Arc::clone(&bytes));
        Ok(bytes)
    }
}

impl Clone for ModuleRef {
    fn clone(&self) -> Self {
        ModuleRef {
            name: self.name.clone(),
            filepath: self.filepath.clone(),
            state: Mutex::new(self.state.lock().clone()),
        }
    }
}

impl fmt::Debug for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.lock() {
            ModuleState::Unresolved(_) => "unresolved".to_string(),
            ModuleState::Resolved(bytes) => format!("resolved({} bytes)", bytes.len()),
            ModuleState::Unresolvable => "unresolvable".to_string(),
        };
        f.debug_struct("ModuleRef")
            .field("name", &self.name)
            .field("filepath", &self.filepath)
            .field("state", &state)
            .finish()
    }
}
