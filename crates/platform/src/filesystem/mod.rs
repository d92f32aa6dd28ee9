//! Filesystem queries used during secure root resolution

use std::path::Path;

/// OS-facing filesystem queries.
///
/// Implementations must perform a single existence check per call and
/// never modify the filesystem.
pub trait FilesystemOperations {
    /// True only if `path` exists and is a directory
    fn exists_as_directory(&self, path: &Path) -> bool;
}

impl<T: FilesystemOperations + ?Sized> FilesystemOperations for &T {
    fn exists_as_directory(&self, path: &Path) -> bool {
        (**self).exists_as_directory(path)
    }
}

/// Filesystem backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl StdFilesystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOperations for StdFilesystem {
    fn exists_as_directory(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                tracing::trace!(path = %path.display(), error = %err, "stat failed");
                false
            }
        }
    }
}
