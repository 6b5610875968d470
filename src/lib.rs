//! Itemforge - deterministic item-definition pipeline for game-server mods
//!
//! Itemforge reads a directory of item-definition JSON files, derives a
//! deterministic internal identifier per item, resolves locale text and a
//! packaged visual-asset reference, and hands fully-resolved clone requests
//! to an item-cloning collaborator (a live server database, or an in-memory
//! table for validation).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{LoadOptions, LoadResult, LoadUseCase, RegisteredItem};
pub use config::Config;
pub use domain::entities::{
    CloneRequest, ItemDefinition, ManifestEntry, PropertyOverrides, DEFAULT_CLONE_TEMPLATE,
};
pub use domain::ports::{
    CloneError, ItemCloner, LoadEvent, LoadEventSink, NoopEventSink,
};
pub use domain::services::{resolve_asset_path, AssetResolution, DEFAULT_ASSET_PATH};
pub use domain::value_objects::{InternalId, LocaleRecord, DEFAULT_LANGUAGE_TAG};
pub use error::{ItemforgeError, ItemforgeResult};
