//! Load Event Port
//!
//! Provides an observable interface for load runs. The host decides the
//! sink and format; the pipeline only emits. Severity is implied by the
//! variant: skips and registrations are informational, fallback and locale
//! conditions are warnings, clone and parse failures are errors.

use std::path::PathBuf;

use crate::domain::value_objects::InternalId;

/// Event emitted during a load run
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// Run started
    Started {
        source: PathBuf,
        definition_count: usize,
    },

    /// Definition lacked an external id and was skipped (not an error)
    DefinitionSkipped { path: PathBuf },

    /// Definition file could not be parsed; the run continues
    DefinitionParseError { path: PathBuf, error: String },

    /// Asset manifest could not be read; resolution degraded to defaults
    ManifestReadError { error: String },

    /// Asset resolved by fallback rather than identity match
    AssetFallback { external_id: String, key: String },

    /// No locale file for this item; display text synthesized
    LocaleMissing { external_id: String },

    /// Locale file present but unusable; display text synthesized
    LocaleParseError { external_id: String, error: String },

    /// Clone request accepted by the collaborator
    ItemRegistered {
        external_id: String,
        internal_id: InternalId,
        template: String,
    },

    /// Collaborator reported a clone failure; no retry
    CloneFailed { external_id: String, error: String },

    /// Run completed
    Completed {
        registered: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving load events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable progress in a terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait LoadEventSink: Send + Sync {
    /// Handle a load event
    fn on_event(&self, event: LoadEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LoadEventSink for NoopEventSink {
    fn on_event(&self, _event: LoadEvent) {
        // Do nothing
    }
}
