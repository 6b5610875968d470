//! JSON Event Sink
//!
//! Outputs load events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LoadEvent, LoadEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl LoadEventSink for JsonEventSink {
    fn on_event(&self, event: LoadEvent) {
        let json = match event {
            LoadEvent::Started {
                source,
                definition_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "source": source.display().to_string(),
                    "definition_count": definition_count,
                })
            }

            LoadEvent::DefinitionSkipped { path } => {
                serde_json::json!({
                    "event": "definition_skipped",
                    "path": path.display().to_string(),
                    "reason": "missing external id",
                })
            }

            LoadEvent::DefinitionParseError { path, error } => {
                serde_json::json!({
                    "event": "definition_parse_error",
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            LoadEvent::ManifestReadError { error } => {
                serde_json::json!({
                    "event": "manifest_read_error",
                    "error": error,
                })
            }

            LoadEvent::AssetFallback { external_id, key } => {
                serde_json::json!({
                    "event": "asset_fallback",
                    "external_id": external_id,
                    "key": key,
                })
            }

            LoadEvent::LocaleMissing { external_id } => {
                serde_json::json!({
                    "event": "locale_missing",
                    "external_id": external_id,
                })
            }

            LoadEvent::LocaleParseError { external_id, error } => {
                serde_json::json!({
                    "event": "locale_parse_error",
                    "external_id": external_id,
                    "error": error,
                })
            }

            LoadEvent::ItemRegistered {
                external_id,
                internal_id,
                template,
            } => {
                serde_json::json!({
                    "event": "item_registered",
                    "external_id": external_id,
                    "internal_id": internal_id.as_str(),
                    "template": template,
                })
            }

            LoadEvent::CloneFailed { external_id, error } => {
                serde_json::json!({
                    "event": "clone_failed",
                    "external_id": external_id,
                    "error": error,
                })
            }

            LoadEvent::Completed {
                registered,
                skipped,
                failed,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "registered": registered,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}
