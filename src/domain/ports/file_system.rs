//! FileSystem port - read-only abstraction over file lookups
//!
//! The pipeline treats the file system as a read-only database (definitions,
//! locale files, the asset manifest). This trait makes that explicit and
//! swappable, enabling in-memory fixtures without disk I/O.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract read-only file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// List files directly inside a directory
    ///
    /// An absent directory is an empty listing, not an error.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;
}
