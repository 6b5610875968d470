//! Property tests for asset-path resolution.

use proptest::prelude::*;

use itemforge::{resolve_asset_path, AssetResolution, ItemDefinition, ManifestEntry};

fn manifest_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,12}(/[a-z0-9_]{1,12}){0,2}\\.bundle").unwrap()
}

fn manifest() -> impl Strategy<Value = Vec<ManifestEntry>> {
    proptest::collection::vec(manifest_key().prop_map(ManifestEntry::new), 0..=6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution is total - never panics, and always yields a
    /// non-empty path, for any id and manifest.
    #[test]
    fn property_resolution_is_total(
        external_id in "(?s).{0,64}",
        manifest in manifest(),
    ) {
        let def = ItemDefinition::default();
        let resolved = resolve_asset_path(&external_id, &def, &manifest);
        prop_assert!(!resolved.path().is_empty());
    }

    /// PROPERTY: A non-blank top-level `bundleKey` always wins, regardless
    /// of the manifest contents.
    #[test]
    fn property_document_override_wins(
        key in "[A-Za-z0-9_./-]{1,32}",
        manifest in manifest(),
    ) {
        let def = ItemDefinition {
            bundle_key: Some(key.clone()),
            ..Default::default()
        };
        let resolved = resolve_asset_path("coin01", &def, &manifest);
        prop_assert_eq!(resolved, AssetResolution::DocumentOverride(key));
    }

    /// PROPERTY: With no overrides and no manifest entries, resolution is
    /// always the fixed default asset.
    #[test]
    fn property_empty_manifest_is_default(
        external_id in "[a-z0-9]{1,32}",
    ) {
        let def = ItemDefinition::default();
        let resolved = resolve_asset_path(&external_id, &def, &[]);
        prop_assert_eq!(resolved, AssetResolution::DefaultAsset);
    }

    /// PROPERTY: With no overrides, a manifest key shaped `mods/{id}.bundle`
    /// is always matched by identity, never reported as fallback.
    #[test]
    fn property_exact_key_always_matches(
        external_id in "[a-z0-9]{3,24}",
        noise in manifest(),
    ) {
        let exact = format!("mods/{}.bundle", external_id);
        let mut entries = noise;
        entries.push(ManifestEntry::new(exact.clone()));

        let def = ItemDefinition::default();
        let resolved = resolve_asset_path(&external_id, &def, &entries);
        prop_assert!(!resolved.is_fallback());
        prop_assert!(matches!(resolved, AssetResolution::ManifestMatch(_)));
    }

    /// PROPERTY: With no overrides and a non-empty manifest, the resolved
    /// path is always one of the manifest keys.
    #[test]
    fn property_resolution_stays_inside_manifest(
        external_id in "[a-z0-9]{1,24}",
        entries in proptest::collection::vec(manifest_key().prop_map(ManifestEntry::new), 1..=6),
    ) {
        let def = ItemDefinition::default();
        let resolved = resolve_asset_path(&external_id, &def, &entries);
        prop_assert!(entries.iter().any(|e| e.key == resolved.path()));
    }
}
