//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use propset_core::{application::ports::Filesystem, error::PropsetResult};

/// Production filesystem implementation using `std::fs`.
///
/// `std::fs::read_to_string` and `std::fs::write` open and close their
/// handles internally, which gives the scoped-acquisition guarantee the
/// port requires.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> PropsetResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> PropsetResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_write_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Read failures become `SourceUnavailable`: a requested source that cannot
/// be read is part of the error taxonomy, not a generic I/O failure.
fn map_read_error(path: &Path, e: io::Error) -> propset_core::error::PropsetError {
    use propset_core::application::ApplicationError;

    ApplicationError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_write_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> propset_core::error::PropsetError {
    use propset_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use propset_core::application::ApplicationError;
    use propset_core::error::PropsetError;

    #[test]
    fn read_missing_file_is_source_unavailable() {
        let fs = LocalFilesystem::new();
        let err = fs
            .read_to_string(Path::new("/definitely/not/here.properties"))
            .unwrap_err();
        assert!(matches!(
            err,
            PropsetError::Application(ApplicationError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.properties");

        let fs = LocalFilesystem::new();
        fs.write_file(&path, "key1=val1\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "key1=val1\n");
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.properties");

        let fs = LocalFilesystem::new();
        fs.write_file(&path, "key1=old\nkey2=old\n").unwrap();
        fs.write_file(&path, "key1=new\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "key1=new\n");
    }
}
