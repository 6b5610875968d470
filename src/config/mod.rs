//! Configuration subsystem
//!
//! TOML configuration describing the content-directory layout, with
//! unknown-key warnings and `ITEMFORGE_*` environment overrides.

mod loader;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning, CONFIG_FILE};
pub use types::{Config, ConstantsConfig, OutputConfig, PathsConfig, Verbosity};
