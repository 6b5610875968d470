//! File System Manifest Source
//!
//! Reads the asset manifest document (`bundles.json` by convention) from a
//! fixed path, fresh on every call. The file-system-as-database behavior is
//! deliberate: bundle packs can change between runs and the manifest is
//! small.

use std::path::PathBuf;

use crate::domain::entities::{AssetManifest, ManifestEntry};
use crate::domain::ports::{FileSystem, ManifestError, ManifestSource};

/// Manifest source that re-reads a JSON document per call
pub struct FsManifestSource<FS: FileSystem> {
    fs: FS,
    path: PathBuf,
}

impl<FS: FileSystem> FsManifestSource<FS> {
    pub fn new(fs: FS, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl<FS: FileSystem> ManifestSource for FsManifestSource<FS> {
    fn load(&self) -> Result<Vec<ManifestEntry>, ManifestError> {
        let content = self
            .fs
            .read(&self.path)
            .map_err(|e| ManifestError::Unreadable(e.to_string()))?;
        let doc: AssetManifest = serde_json::from_str(&content)?;
        Ok(doc.manifest)
    }
}
