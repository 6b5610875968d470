//! LocaleSource port - abstraction for per-item locale documents
//!
//! Locale files are keyed by the item's *external* id, not the hashed
//! internal id. `Ok(None)` means "no file" (synthesize and continue);
//! `Err` means "file exists but could not be used" (synthesize, continue,
//! report louder).

use thiserror::Error;

use crate::domain::services::LocaleDoc;

/// Locale loading errors
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale file unreadable: {0}")]
    Unreadable(String),

    #[error("locale file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstract source of per-item locale documents
pub trait LocaleSource {
    /// Load the locale document for one external id, if present
    fn load(&self, external_id: &str) -> Result<Option<LocaleDoc>, LocaleError>;
}

/// Locale source with no documents at all, for tests and minimal hosts
pub struct NoLocales;

impl LocaleSource for NoLocales {
    fn load(&self, _external_id: &str) -> Result<Option<LocaleDoc>, LocaleError> {
        Ok(None)
    }
}
