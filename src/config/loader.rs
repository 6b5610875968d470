//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ItemforgeError, ItemforgeResult};

use super::types::Config;

/// Well-known configuration file name inside a content root
pub const CONFIG_FILE: &str = "itemforge.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ItemforgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ItemforgeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (ITEMFORGE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var("ITEMFORGE_ITEMS_DIR") {
        config.paths.items_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("ITEMFORGE_LOCALES_DIR") {
        config.paths.locales_dir = PathBuf::from(dir);
    }
    if let Ok(manifest) = std::env::var("ITEMFORGE_MANIFEST") {
        config.paths.manifest = PathBuf::from(manifest);
    }
    config
}
