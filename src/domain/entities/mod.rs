//! Domain Entities
//!
//! Core domain objects: the parsed input document and the resolved output.

pub mod clone_request;
pub mod definition;
pub mod manifest;

pub use clone_request::{CloneRequest, PropertyOverrides};
pub use definition::{DefinitionProps, ItemDefinition, DEFAULT_CLONE_TEMPLATE};
pub use manifest::{AssetManifest, ManifestEntry};
