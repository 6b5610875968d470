//! Load Use Case
//!
//! Orchestrates the item-definition pipeline:
//! 1. Scan the definitions directory
//! 2. Per file: derive the deterministic internal id, resolve asset and
//!    locale text, assemble a clone request
//! 3. Hand each request to the item-cloning collaborator
//! 4. Report outcomes through the event sink
//!
//! This use case is pure orchestration - resolution logic lives in domain
//! services. Files are independent units of work: a skip, a parse error, or
//! a collaborator failure on one file never stops the batch, and nothing in
//! this module can abort a run.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{CloneRequest, ItemDefinition, PropertyOverrides};
use crate::domain::ports::{
    DefinitionRepository, ItemCloner, LoadEvent, LoadEventSink, LocaleSource, ManifestSource,
    NoopEventSink,
};
use crate::domain::services::{resolve_asset_path, resolve_locale, AssetResolution};
use crate::domain::value_objects::{InternalId, LocaleRecord, DEFAULT_LANGUAGE_TAG};

use super::options::LoadOptions;
use super::result::{LoadResult, RegisteredItem};

/// Load use case - runs the item-definition pipeline
///
/// Parameterized by its read-side ports; the collaborator and the event
/// sink are passed per run, so one use case can drive several hosts.
pub struct LoadUseCase<DR, MS, LS>
where
    DR: DefinitionRepository,
    MS: ManifestSource,
    LS: LocaleSource,
{
    definitions: DR,
    manifest: MS,
    locales: LS,
}

impl<DR, MS, LS> LoadUseCase<DR, MS, LS>
where
    DR: DefinitionRepository,
    MS: ManifestSource,
    LS: LocaleSource,
{
    pub fn new(definitions: DR, manifest: MS, locales: LS) -> Self {
        Self {
            definitions,
            manifest,
            locales,
        }
    }

    /// Execute the load use case silently
    pub fn execute(&self, cloner: &mut dyn ItemCloner, options: &LoadOptions) -> LoadResult {
        self.execute_with_events(cloner, options, Arc::new(NoopEventSink))
    }

    /// Execute the load use case with event reporting
    pub fn execute_with_events(
        &self,
        cloner: &mut dyn ItemCloner,
        options: &LoadOptions,
        event_sink: Arc<dyn LoadEventSink>,
    ) -> LoadResult {
        let mut result = LoadResult::new();

        // Even a failed directory scan keeps the Started/Completed bracket
        // intact for event consumers.
        let files = match self.definitions.load_all(&options.source) {
            Ok(files) => files,
            Err(e) => {
                event_sink.on_event(LoadEvent::Started {
                    source: options.source.clone(),
                    definition_count: 0,
                });
                result
                    .errors
                    .push(format!("failed to scan definitions: {}", e));
                event_sink.on_event(LoadEvent::Completed {
                    registered: 0,
                    skipped: 0,
                    failed: result.errors.len(),
                });
                return result;
            }
        };
        result.definition_count = files.len();

        event_sink.on_event(LoadEvent::Started {
            source: options.source.clone(),
            definition_count: files.len(),
        });

        for file in files {
            let definition = match file.parsed {
                Ok(definition) => definition,
                Err(e) => {
                    let error = e.to_string();
                    event_sink.on_event(LoadEvent::DefinitionParseError {
                        path: file.path.clone(),
                        error: error.clone(),
                    });
                    result
                        .errors
                        .push(format!("{}: {}", file.path.display(), error));
                    continue;
                }
            };

            let external_id = match definition.external_id.as_deref() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    event_sink.on_event(LoadEvent::DefinitionSkipped {
                        path: file.path.clone(),
                    });
                    result.skipped.push(file.path);
                    continue;
                }
            };

            let request =
                self.build_request(&external_id, &definition, options, &mut result, &event_sink);

            if options.dry_run {
                result.registered.push(RegisteredItem {
                    external_id,
                    internal_id: request.new_internal_id,
                });
                continue;
            }

            match cloner.clone_item(&request) {
                Ok(()) => {
                    event_sink.on_event(LoadEvent::ItemRegistered {
                        external_id: external_id.clone(),
                        internal_id: request.new_internal_id.clone(),
                        template: request.source_template_id.clone(),
                    });
                    result.registered.push(RegisteredItem {
                        external_id,
                        internal_id: request.new_internal_id,
                    });
                }
                Err(e) => {
                    let error = e.to_string();
                    event_sink.on_event(LoadEvent::CloneFailed {
                        external_id: external_id.clone(),
                        error: error.clone(),
                    });
                    result.errors.push(format!("{}: {}", external_id, error));
                }
            }
        }

        event_sink.on_event(LoadEvent::Completed {
            registered: result.registered.len(),
            skipped: result.skipped.len(),
            failed: result.errors.len(),
        });

        result
    }

    /// Process one parsed definition into a clone request, or skip it
    ///
    /// Returns `None` when the definition carries no external id. Degraded
    /// resolutions (asset fallback, locale problems) are silent here; use
    /// `execute_with_events` to observe them.
    pub fn process(&self, definition: &ItemDefinition) -> Option<CloneRequest> {
        let external_id = definition.external_id.as_deref().filter(|id| !id.is_empty())?;
        let mut scratch = LoadResult::new();
        Some(self.build_request(
            external_id,
            definition,
            &LoadOptions::new(""),
            &mut scratch,
            &(Arc::new(NoopEventSink) as Arc<dyn LoadEventSink>),
        ))
    }

    /// Assemble the clone request for one definition
    ///
    /// Infallible: every degraded condition resolves to a safe default and
    /// is reported as a warning.
    fn build_request(
        &self,
        external_id: &str,
        definition: &ItemDefinition,
        options: &LoadOptions,
        result: &mut LoadResult,
        event_sink: &Arc<dyn LoadEventSink>,
    ) -> CloneRequest {
        // Manifest is re-read for every definition; failure degrades to
        // an empty manifest, which resolves to the default asset path.
        let manifest = match self.manifest.load() {
            Ok(entries) => entries,
            Err(e) => {
                let error = e.to_string();
                event_sink.on_event(LoadEvent::ManifestReadError {
                    error: error.clone(),
                });
                result
                    .warnings
                    .push(format!("{}: manifest unavailable ({})", external_id, error));
                Vec::new()
            }
        };

        let resolution = resolve_asset_path(external_id, definition, &manifest);
        if let AssetResolution::FirstEntryFallback(key) = &resolution {
            event_sink.on_event(LoadEvent::AssetFallback {
                external_id: external_id.to_string(),
                key: key.clone(),
            });
            result.warnings.push(format!(
                "{}: no matching asset, fell back to {}",
                external_id, key
            ));
        }

        let asset_path = match &resolution {
            AssetResolution::DefaultAsset => options.default_asset.clone(),
            _ => resolution.path().to_string(),
        };

        let locale = self.resolve_locale_record(external_id, result, event_sink);
        let mut locales = BTreeMap::new();
        locales.insert(DEFAULT_LANGUAGE_TAG.to_string(), locale);

        CloneRequest {
            source_template_id: definition
                .effective_template_or(&options.fallback_template)
                .to_string(),
            new_internal_id: InternalId::from_external(external_id),
            parent_id: definition.parent_id.clone().unwrap_or_default(),
            handbook_parent_id: definition.handbook_parent_id.clone().unwrap_or_default(),
            handbook_price_roubles: definition.handbook_price,
            locales,
            overrides: PropertyOverrides {
                name: definition.props.name.clone(),
                description: definition.props.description.clone(),
                asset_path,
            },
        }
    }

    fn resolve_locale_record(
        &self,
        external_id: &str,
        result: &mut LoadResult,
        event_sink: &Arc<dyn LoadEventSink>,
    ) -> LocaleRecord {
        match self.locales.load(external_id) {
            Ok(Some(doc)) => resolve_locale(external_id, Some(&doc)),
            Ok(None) => {
                event_sink.on_event(LoadEvent::LocaleMissing {
                    external_id: external_id.to_string(),
                });
                result
                    .warnings
                    .push(format!("{}: no locale file, synthesized", external_id));
                resolve_locale(external_id, None)
            }
            Err(e) => {
                let error = e.to_string();
                event_sink.on_event(LoadEvent::LocaleParseError {
                    external_id: external_id.to_string(),
                    error: error.clone(),
                });
                result
                    .warnings
                    .push(format!("{}: locale unusable ({})", external_id, error));
                resolve_locale(external_id, None)
            }
        }
    }
}
