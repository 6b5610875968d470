//! ManifestSource port - abstraction for loading the asset manifest
//!
//! The reference behavior re-reads the manifest on every resolution call, so
//! the port exposes a single `load` with no caching contract. A failed load
//! degrades to "no manifest" at the call site; it never aborts a run.

use thiserror::Error;

use crate::domain::entities::ManifestEntry;

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest unreadable: {0}")]
    Unreadable(String),

    #[error("manifest malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstract source of the ordered asset manifest
pub trait ManifestSource {
    /// Load the manifest entries, in stored order
    fn load(&self) -> Result<Vec<ManifestEntry>, ManifestError>;
}

/// Fixed in-memory manifest, for tests and embedding hosts
pub struct StaticManifestSource {
    entries: Vec<ManifestEntry>,
}

impl StaticManifestSource {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl ManifestSource for StaticManifestSource {
    fn load(&self) -> Result<Vec<ManifestEntry>, ManifestError> {
        Ok(self.entries.clone())
    }
}
