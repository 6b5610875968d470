//! Locale Record Value Object
//!
//! Resolved display text for one language tag.

use serde::{Deserialize, Serialize};

/// Default language tag used when a definition carries no locale data
pub const DEFAULT_LANGUAGE_TAG: &str = "en";

/// Resolved display text for one language tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    pub name: String,
    pub short_name: String,
    pub description: String,
}

impl LocaleRecord {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            description: description.into(),
        }
    }

    /// Synthesize a record from the external id alone
    ///
    /// Used when no locale document exists (or it cannot be read): the
    /// external id doubles as name and short name, description stays empty.
    pub fn synthesized(external_id: &str) -> Self {
        Self {
            name: external_id.to_string(),
            short_name: external_id.to_string(),
            description: String::new(),
        }
    }
}
