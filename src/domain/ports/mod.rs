//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod definition_repository;
pub mod file_system;
pub mod item_cloner;
pub mod load_events;
pub mod locale_source;
pub mod manifest_source;

pub use definition_repository::{DefinitionFile, DefinitionRepository};
pub use file_system::{FileSystem, FsError, FsResult};
pub use item_cloner::{CloneError, ItemCloner};
pub use load_events::{LoadEvent, LoadEventSink, NoopEventSink};
pub use locale_source::{LocaleError, LocaleSource, NoLocales};
pub use manifest_source::{ManifestError, ManifestSource, StaticManifestSource};
