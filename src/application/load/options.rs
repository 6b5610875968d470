//! Load Options
//!
//! Configuration types for load runs.

use std::path::PathBuf;

use crate::domain::entities::DEFAULT_CLONE_TEMPLATE;
use crate::domain::services::DEFAULT_ASSET_PATH;

/// Options for the load use case
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory of item-definition documents
    pub source: PathBuf,
    /// Dry run (resolve everything, never call the collaborator)
    pub dry_run: bool,
    /// Clone template used when a definition carries no `_proto`
    pub fallback_template: String,
    /// Asset path used when nothing in the manifest resolves
    pub default_asset: String,
}

impl LoadOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dry_run: false,
            fallback_template: DEFAULT_CLONE_TEMPLATE.to_string(),
            default_asset: DEFAULT_ASSET_PATH.to_string(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_fallback_template(mut self, template: impl Into<String>) -> Self {
        self.fallback_template = template.into();
        self
    }

    pub fn with_default_asset(mut self, asset: impl Into<String>) -> Self {
        self.default_asset = asset.into();
        self
    }
}
