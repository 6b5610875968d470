//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk reads.

use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(Into::into)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        // Directory iteration order is platform-dependent; sort for
        // reproducible runs and stable event streams.
        files.sort();
        Ok(files)
    }
}
