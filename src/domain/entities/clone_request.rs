//! CloneRequest entity - a fully-resolved clone instruction
//!
//! CloneRequests are the pipeline's output: everything the item-cloning
//! collaborator needs to derive a new item from a template and register it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{InternalId, LocaleRecord};

/// Property overrides applied on top of the cloned template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOverrides {
    /// Display name, copied verbatim from the definition's `_props.Name`
    pub name: Option<String>,
    /// Description, copied verbatim from `_props.Description`
    pub description: Option<String>,
    /// Resolved packaged-asset path
    pub asset_path: String,
}

/// A fully-resolved instruction to derive a new item by cloning a template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneRequest {
    /// Template item to clone from
    pub source_template_id: String,
    /// Deterministic identity of the new item
    pub new_internal_id: InternalId,
    /// Parent category (empty string when the definition omits it)
    pub parent_id: String,
    /// Handbook parent category (empty string when omitted)
    pub handbook_parent_id: String,
    /// Handbook price in roubles
    pub handbook_price_roubles: Option<f64>,
    /// Resolved display text per language tag
    pub locales: BTreeMap<String, LocaleRecord>,
    /// Property overrides applied after cloning
    pub overrides: PropertyOverrides,
}

impl CloneRequest {
    /// Check whether any display text was carried over from the definition
    pub fn has_display_overrides(&self) -> bool {
        self.overrides.name.is_some() || self.overrides.description.is_some()
    }
}
