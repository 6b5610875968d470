//! Locale Resolver domain service
//!
//! Turns an optionally-present per-item locale document into the
//! `LocaleRecord` stored on the clone request. Pure: document loading lives
//! behind the `LocaleSource` port.

use serde::Deserialize;

use crate::domain::value_objects::LocaleRecord;

/// A per-item locale document as authored on disk
///
/// All fields optional; defaulting happens in [`resolve_locale`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocaleDoc {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "ShortName")]
    pub short_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// Resolve the display text for one item
///
/// With a document: name defaults to the external id, short name defaults to
/// the name, description defaults to empty. Without one: the record is
/// synthesized from the external id alone.
pub fn resolve_locale(external_id: &str, doc: Option<&LocaleDoc>) -> LocaleRecord {
    match doc {
        Some(doc) => {
            let name = doc
                .name
                .clone()
                .unwrap_or_else(|| external_id.to_string());
            let short_name = doc.short_name.clone().unwrap_or_else(|| name.clone());
            let description = doc.description.clone().unwrap_or_default();
            LocaleRecord::new(name, short_name, description)
        }
        None => LocaleRecord::synthesized(external_id),
    }
}
