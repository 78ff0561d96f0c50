//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use propset_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut files = self.files.write().unwrap();
        files.insert(path.into(), content.into());
    }

    /// Read a file's content without going through the port (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.files.read().ok()?;
        files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let files = self.files.read().unwrap();
        files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut files = self.files.write().unwrap();
        files.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> propset_core::error::PropsetResult<String> {
        let files = self
            .files
            .read()
            .map_err(|_| propset_core::error::PropsetError::Internal {
                message: "memory filesystem lock poisoned".into(),
            })?;

        files.get(path).cloned().ok_or_else(|| {
            propset_core::application::ApplicationError::SourceUnavailable {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> propset_core::error::PropsetResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| propset_core::error::PropsetError::Internal {
                message: "memory filesystem lock poisoned".into(),
            })?;

        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap();
        files.contains_key(path)
    }
}
