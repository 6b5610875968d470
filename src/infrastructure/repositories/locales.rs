//! File System Locale Source
//!
//! Loads per-item locale documents from a directory, filename keyed by the
//! item's external id: `<locales_dir>/<external_id>.json`.

use std::path::PathBuf;

use crate::domain::ports::{FileSystem, LocaleError, LocaleSource};
use crate::domain::services::LocaleDoc;

/// Locale source reading one JSON document per item
pub struct FsLocaleSource<FS: FileSystem> {
    fs: FS,
    dir: PathBuf,
}

impl<FS: FileSystem> FsLocaleSource<FS> {
    pub fn new(fs: FS, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }
}

impl<FS: FileSystem> LocaleSource for FsLocaleSource<FS> {
    fn load(&self, external_id: &str) -> Result<Option<LocaleDoc>, LocaleError> {
        let path = self.dir.join(format!("{}.json", external_id));
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let content = self
            .fs
            .read(&path)
            .map_err(|e| LocaleError::Unreadable(e.to_string()))?;
        let doc: LocaleDoc = serde_json::from_str(&content)?;
        Ok(Some(doc))
    }
}
