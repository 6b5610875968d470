//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_CLONE_TEMPLATE;
use crate::domain::services::DEFAULT_ASSET_PATH;
use crate::error::ItemforgeResult;

use super::loader::{self, ConfigWarning};

/// Content-directory layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory of item-definition documents
    #[serde(default = "default_items_dir")]
    pub items_dir: PathBuf,

    /// Directory of per-item locale documents
    #[serde(default = "default_locales_dir")]
    pub locales_dir: PathBuf,

    /// Asset manifest document
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            items_dir: default_items_dir(),
            locales_dir: default_locales_dir(),
            manifest: default_manifest(),
        }
    }
}

fn default_items_dir() -> PathBuf {
    PathBuf::from("db/items")
}

fn default_locales_dir() -> PathBuf {
    PathBuf::from("db/locales/itemsdescription")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("bundles.json")
}

/// Pipeline default constants, overridable per content root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantsConfig {
    /// Clone template used when a definition carries no `_proto`
    #[serde(default = "default_fallback_template")]
    pub fallback_template: String,

    /// Asset path used when nothing in the manifest resolves
    #[serde(default = "default_default_asset")]
    pub default_asset: String,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            fallback_template: default_fallback_template(),
            default_asset: default_default_asset(),
        }
    }
}

fn default_fallback_template() -> String {
    DEFAULT_CLONE_TEMPLATE.to_string()
}

fn default_default_asset() -> String {
    DEFAULT_ASSET_PATH.to_string()
}

/// How chatty the console event stream is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No event lines, summary only
    Quiet,
    /// Warnings, errors, and run brackets
    #[default]
    Normal,
    /// Everything, including per-item registration lines
    Verbose,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Top-level itemforge configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub constants: ConstantsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ItemforgeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and surface unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> ItemforgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configured paths against a content root
    pub fn resolved_against(&self, root: &Path) -> Self {
        Self {
            paths: PathsConfig {
                items_dir: root.join(&self.paths.items_dir),
                locales_dir: root.join(&self.paths.locales_dir),
                manifest: root.join(&self.paths.manifest),
            },
            constants: self.constants.clone(),
            output: self.output.clone(),
        }
    }
}
