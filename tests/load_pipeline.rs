//! End-to-end pipeline tests over a real content directory on disk.

mod common;

use std::sync::{Arc, Mutex};

use common::ContentRoot;
use itemforge::application::{LoadOptions, LoadUseCase};
use itemforge::domain::ports::{LoadEvent, LoadEventSink};
use itemforge::domain::value_objects::{InternalId, DEFAULT_LANGUAGE_TAG};
use itemforge::infrastructure::cloning::InMemoryItemTable;
use itemforge::infrastructure::fs::LocalFs;
use itemforge::infrastructure::repositories::{
    FsDefinitionRepository, FsLocaleSource, FsManifestSource,
};
use itemforge::DEFAULT_ASSET_PATH;

struct RecordingEventSink {
    events: Arc<Mutex<Vec<LoadEvent>>>,
}

impl RecordingEventSink {
    fn new() -> (Arc<Self>, Arc<Mutex<Vec<LoadEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self {
                events: events.clone(),
            }),
            events,
        )
    }
}

impl LoadEventSink for RecordingEventSink {
    fn on_event(&self, event: LoadEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn use_case_for(root: &ContentRoot) -> LoadUseCase<
    FsDefinitionRepository<LocalFs>,
    FsManifestSource<LocalFs>,
    FsLocaleSource<LocalFs>,
> {
    LoadUseCase::new(
        FsDefinitionRepository::new(LocalFs::new()),
        FsManifestSource::new(LocalFs::new(), root.manifest_path()),
        FsLocaleSource::new(LocalFs::new(), root.locales_dir()),
    )
}

#[test]
fn end_to_end_coin_example() {
    let root = ContentRoot::new();
    root.write_definition(
        "coin01",
        r#"{"_id": "coin01", "_proto": "base123", "_props": {"Name": "Coin", "Description": "Shiny"}}"#,
    );
    root.write_manifest(&["mods/coin01.bundle"]);
    // no locale file on purpose

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute(&mut table, &LoadOptions::new(root.items_dir()));

    assert!(result.is_success());
    assert_eq!(result.registered.len(), 1);

    // sha256("coin01"), first 12 bytes
    let expected_id = "2efc64b93c0e3ad8caccb19e";
    assert_eq!(result.registered[0].internal_id.as_str(), expected_id);

    let request = table.get(&InternalId::from_external("coin01")).unwrap();
    assert_eq!(request.source_template_id, "base123");
    assert_eq!(request.overrides.name.as_deref(), Some("Coin"));
    assert_eq!(request.overrides.description.as_deref(), Some("Shiny"));
    assert_eq!(request.overrides.asset_path, "mods/coin01.bundle");

    let locale = &request.locales[DEFAULT_LANGUAGE_TAG];
    assert_eq!(locale.name, "coin01");
    assert_eq!(locale.short_name, "coin01");
    assert_eq!(locale.description, "");
}

#[test]
fn locale_file_feeds_display_text() {
    let root = ContentRoot::new();
    root.write_definition("coin01", r#"{"_id": "coin01"}"#);
    root.write_manifest(&["mods/coin01.bundle"]);
    root.write_locale(
        "coin01",
        r#"{"Name": "Gold Coin", "ShortName": "Gold", "Description": "Heavy"}"#,
    );

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    use_case.execute(&mut table, &LoadOptions::new(root.items_dir()));

    let request = table.get(&InternalId::from_external("coin01")).unwrap();
    let locale = &request.locales[DEFAULT_LANGUAGE_TAG];
    assert_eq!(locale.name, "Gold Coin");
    assert_eq!(locale.short_name, "Gold");
    assert_eq!(locale.description, "Heavy");
}

#[test]
fn missing_manifest_degrades_to_default_asset() {
    let root = ContentRoot::new();
    root.write_definition("coin01", r#"{"_id": "coin01"}"#);
    // no bundles.json at all

    let (sink, events) = RecordingEventSink::new();
    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute_with_events(
        &mut table,
        &LoadOptions::new(root.items_dir()),
        sink,
    );

    assert!(result.is_success());
    assert!(result.is_degraded());
    let request = table.get(&InternalId::from_external("coin01")).unwrap();
    assert_eq!(request.overrides.asset_path, DEFAULT_ASSET_PATH);
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, LoadEvent::ManifestReadError { .. })));
}

#[test]
fn one_bad_file_never_stops_the_batch() {
    let root = ContentRoot::new();
    root.write_definition("aaa_broken", "{this is not json");
    root.write_definition("bbb_anonymous", r#"{"_proto": "base123"}"#);
    root.write_definition("ccc_good", r#"{"_id": "coin01"}"#);
    root.write_manifest(&["mods/coin01.bundle"]);

    let (sink, events) = RecordingEventSink::new();
    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute_with_events(
        &mut table,
        &LoadOptions::new(root.items_dir()),
        sink,
    );

    assert_eq!(result.definition_count, 3);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.registered.len(), 1);
    assert_eq!(table.len(), 1);

    let events = events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, LoadEvent::DefinitionParseError { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, LoadEvent::DefinitionSkipped { .. })));
    assert!(matches!(events.last(), Some(LoadEvent::Completed { .. })));
}

#[test]
fn absent_definitions_directory_is_a_no_op() {
    let root = ContentRoot::new();
    // items dir never created

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute(&mut table, &LoadOptions::new(root.items_dir()));

    assert!(result.is_success());
    assert_eq!(result.definition_count, 0);
    assert!(table.is_empty());
}

#[test]
fn same_content_two_runs_same_ids() {
    let root = ContentRoot::new();
    root.write_definition("coin01", r#"{"_id": "coin01"}"#);
    root.write_manifest(&["mods/coin01.bundle"]);

    let use_case = use_case_for(&root);

    let mut first = InMemoryItemTable::new();
    use_case.execute(&mut first, &LoadOptions::new(root.items_dir()));
    let mut second = InMemoryItemTable::new();
    use_case.execute(&mut second, &LoadOptions::new(root.items_dir()));

    let ids_first: Vec<_> = first.iter().map(|(id, _)| id.clone()).collect();
    let ids_second: Vec<_> = second.iter().map(|(id, _)| id.clone()).collect();
    assert_eq!(ids_first, ids_second);
}

#[test]
fn duplicate_external_ids_are_rejected_by_the_table() {
    let root = ContentRoot::new();
    root.write_definition("first", r#"{"_id": "coin01"}"#);
    root.write_definition("second", r#"{"_id": "coin01"}"#);
    root.write_manifest(&["mods/coin01.bundle"]);

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute(&mut table, &LoadOptions::new(root.items_dir()));

    // Both files resolve, but the second clone collides on the
    // deterministic id and is reported as a collaborator failure.
    assert_eq!(result.registered.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(table.len(), 1);
}

#[test]
fn config_constants_flow_into_resolution() {
    let root = ContentRoot::new();
    root.write_definition("coin01", r#"{"_id": "coin01"}"#);
    // no _proto, no manifest: both configured constants must apply
    let config_path = root.path().join("itemforge.toml");
    std::fs::write(
        &config_path,
        r#"
[constants]
fallback_template = "aaaaaaaaaaaaaaaaaaaaaaaa"
default_asset = "mods/custom_default.bundle"
"#,
    )
    .unwrap();

    let config = itemforge::Config::load(&config_path)
        .unwrap()
        .resolved_against(root.path());

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    use_case.execute(
        &mut table,
        &LoadOptions::new(config.paths.items_dir.clone())
            .with_fallback_template(config.constants.fallback_template.clone())
            .with_default_asset(config.constants.default_asset.clone()),
    );

    let request = table.get(&InternalId::from_external("coin01")).unwrap();
    assert_eq!(request.source_template_id, "aaaaaaaaaaaaaaaaaaaaaaaa");
    assert_eq!(request.overrides.asset_path, "mods/custom_default.bundle");
}

#[test]
fn dry_run_writes_nothing() {
    let root = ContentRoot::new();
    root.write_definition("coin01", r#"{"_id": "coin01"}"#);
    root.write_manifest(&["mods/coin01.bundle"]);

    let use_case = use_case_for(&root);
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute(
        &mut table,
        &LoadOptions::new(root.items_dir()).with_dry_run(true),
    );

    assert_eq!(result.registered.len(), 1);
    assert!(table.is_empty());
}
