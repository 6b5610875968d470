//! Domain Services
//!
//! Pure resolution logic with no I/O. The load use case feeds these from
//! the ports and interprets their results.

pub mod asset_resolver;
pub mod locale_resolver;

pub use asset_resolver::{resolve_asset_path, AssetResolution, DEFAULT_ASSET_PATH};
pub use locale_resolver::{resolve_locale, LocaleDoc};
