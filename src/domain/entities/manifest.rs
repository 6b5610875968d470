//! Asset manifest - packaged visual assets available for binding
//!
//! The manifest is an ordered list of entries, each naming one packaged
//! asset. Order matters: resolution scans in stored order and falls back to
//! the first entry.

use serde::Deserialize;

/// One row of the asset manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Path/identifier of the packaged asset, e.g. `mods/coin01.bundle`
    pub key: String,
}

impl ManifestEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Asset manifest document as stored on disk: `{"manifest": [{"key": ...}]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub manifest: Vec<ManifestEntry>,
}
