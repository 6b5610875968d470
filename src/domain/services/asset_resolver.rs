//! Asset Resolver domain service
//!
//! Decides which packaged asset an item should reference. Pure: operates on
//! an already-loaded manifest; manifest I/O lives behind the
//! `ManifestSource` port and its failures degrade to an empty manifest.
//!
//! Precedence, highest first:
//! 1. top-level `bundleKey` of the definition document
//! 2. nested `_props.BundleKey`
//! 3. first manifest entry matching the external id (case-insensitive)
//! 4. first manifest entry of a non-empty manifest, flagged as fallback
//! 5. the default asset path constant

use std::path::Path;

use crate::domain::entities::{ItemDefinition, ManifestEntry};

/// Default asset path used when nothing else resolves
pub const DEFAULT_ASSET_PATH: &str = "mods/tarkov_coin.bundle";

/// Outcome of asset resolution, carrying the chosen key and its provenance
///
/// Callers must be able to tell "matched by identity" apart from "fell back
/// to the first entry", so the provenance is part of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetResolution {
    /// Top-level `bundleKey` override
    DocumentOverride(String),
    /// Nested `_props.BundleKey` override
    PropertyOverride(String),
    /// Manifest entry matched by external id
    ManifestMatch(String),
    /// No match; first manifest entry returned as a degraded fallback
    FirstEntryFallback(String),
    /// Manifest empty or unreadable; fixed default asset path
    DefaultAsset,
}

impl AssetResolution {
    /// The resolved asset path
    pub fn path(&self) -> &str {
        match self {
            AssetResolution::DocumentOverride(key)
            | AssetResolution::PropertyOverride(key)
            | AssetResolution::ManifestMatch(key)
            | AssetResolution::FirstEntryFallback(key) => key,
            AssetResolution::DefaultAsset => DEFAULT_ASSET_PATH,
        }
    }

    /// True when the result did not come from an override or an id match
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            AssetResolution::FirstEntryFallback(_) | AssetResolution::DefaultAsset
        )
    }
}

/// Resolve the asset path for one item
///
/// Total: always produces a usable path. The manifest is scanned in stored
/// order and the first match wins.
pub fn resolve_asset_path(
    external_id: &str,
    definition: &ItemDefinition,
    manifest: &[ManifestEntry],
) -> AssetResolution {
    if let Some(key) = non_blank(definition.bundle_key.as_deref()) {
        return AssetResolution::DocumentOverride(key.to_string());
    }

    if let Some(key) = non_blank(definition.props.bundle_key.as_deref()) {
        return AssetResolution::PropertyOverride(key.to_string());
    }

    let id_lower = external_id.to_lowercase();
    for entry in manifest {
        if key_matches_id(&entry.key, &id_lower) {
            return AssetResolution::ManifestMatch(entry.key.clone());
        }
    }

    if let Some(first) = manifest.first() {
        return AssetResolution::FirstEntryFallback(first.key.clone());
    }

    AssetResolution::DefaultAsset
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fuzzy id match against a manifest key
///
/// Either the key's file stem contains the id, or the key contains the id as
/// a path segment (`/{id}.` or `/{id}/`). Deliberately loose: short ids can
/// match unrelated paths, which mirrors the established resolution behavior.
fn key_matches_id(key: &str, id_lower: &str) -> bool {
    let key_lower = key.to_lowercase();

    let stem = Path::new(&key_lower)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    if stem.contains(id_lower) {
        return true;
    }

    key_lower.contains(&format!("/{}.", id_lower)) || key_lower.contains(&format!("/{}/", id_lower))
}
