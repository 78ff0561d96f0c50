//! Driven (output) ports: interfaces the application calls outward through.

use std::path::Path;

use crate::error::PropsetResult;

/// Filesystem operations the edit workflow needs.
///
/// One invocation performs at most one read (the optional source) and one
/// write (the output). Implementations must use scoped acquisition so file
/// handles are released on every exit path, including failures.
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> PropsetResult<String>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> PropsetResult<()>;

    /// `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
