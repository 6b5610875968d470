//! Common test utilities for itemforge integration tests.
//!
//! Provides `ContentRoot`, an isolated on-disk content directory with
//! helpers for writing definition files, locale files, and the asset
//! manifest in the layout the pipeline expects.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// An isolated content root on disk
pub struct ContentRoot {
    dir: TempDir,
}

impl ContentRoot {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp content root"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn items_dir(&self) -> PathBuf {
        self.dir.path().join("db/items")
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.dir.path().join("db/locales/itemsdescription")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("bundles.json")
    }

    /// Write one item-definition document
    pub fn write_definition(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.items_dir();
        std::fs::create_dir_all(&dir).expect("create items dir");
        let path = dir.join(format!("{}.json", name));
        std::fs::write(&path, content).expect("write definition");
        path
    }

    /// Write one per-item locale document, keyed by external id
    pub fn write_locale(&self, external_id: &str, content: &str) -> PathBuf {
        let dir = self.locales_dir();
        std::fs::create_dir_all(&dir).expect("create locales dir");
        let path = dir.join(format!("{}.json", external_id));
        std::fs::write(&path, content).expect("write locale");
        path
    }

    /// Write the asset manifest from a list of keys
    pub fn write_manifest(&self, keys: &[&str]) -> PathBuf {
        let entries: Vec<serde_json::Value> = keys
            .iter()
            .map(|k| serde_json::json!({ "key": k }))
            .collect();
        let doc = serde_json::json!({ "manifest": entries });
        let path = self.manifest_path();
        std::fs::write(&path, doc.to_string()).expect("write manifest");
        path
    }
}
