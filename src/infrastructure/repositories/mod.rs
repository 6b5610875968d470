//! File-system-backed implementations of the read-side ports

mod definitions;
mod locales;
mod manifest;

pub use definitions::FsDefinitionRepository;
pub use locales::FsLocaleSource;
pub use manifest::FsManifestSource;
