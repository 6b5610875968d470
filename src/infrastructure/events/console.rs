//! Console Event Sink
//!
//! Human-readable progress lines for interactive terminal use.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LoadEvent, LoadEventSink};

/// Event sink that prints one line per event
///
/// Non-verbose sinks keep warnings, errors, skips, and the run brackets but
/// drop per-item registration lines.
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stderr
    ///
    /// Events go to stderr so stdout stays free for machine output.
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            verbose: false,
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose: false,
        }
    }

    /// Include per-item registration lines
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl LoadEventSink for ConsoleEventSink {
    fn on_event(&self, event: LoadEvent) {
        match event {
            LoadEvent::Started {
                source,
                definition_count,
            } => self.line(format!(
                "loading {} definition(s) from {}",
                definition_count,
                source.display()
            )),
            LoadEvent::DefinitionSkipped { path } => {
                self.line(format!("skip {} (no external id)", path.display()))
            }
            LoadEvent::DefinitionParseError { path, error } => {
                self.line(format!("error {}: {}", path.display(), error))
            }
            LoadEvent::ManifestReadError { error } => {
                self.line(format!("warning: {}", error))
            }
            LoadEvent::AssetFallback { external_id, key } => self.line(format!(
                "warning: {} has no matching asset, using {}",
                external_id, key
            )),
            LoadEvent::LocaleMissing { external_id } => self.line(format!(
                "warning: {} has no locale file, synthesized",
                external_id
            )),
            LoadEvent::LocaleParseError { external_id, error } => self.line(format!(
                "warning: locale for {} unusable: {}",
                external_id, error
            )),
            LoadEvent::ItemRegistered {
                external_id,
                internal_id,
                template,
            } => {
                if self.verbose {
                    self.line(format!(
                        "registered {} -> {} (template {})",
                        external_id, internal_id, template
                    ))
                }
            }
            LoadEvent::CloneFailed { external_id, error } => {
                self.line(format!("error: clone of {} failed: {}", external_id, error))
            }
            LoadEvent::Completed {
                registered,
                skipped,
                failed,
            } => self.line(format!(
                "done: {} registered, {} skipped, {} failed",
                registered, skipped, failed
            )),
        }
    }
}
