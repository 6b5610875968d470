//! ItemDefinition entity - one human-authored item-definition document
//!
//! Definitions are the "source code" of itemforge - JSON files that describe
//! how a new item derives from a template item. One file per item, parsed
//! once per run, immutable afterwards.

use serde::Deserialize;

use crate::error::{ItemforgeError, ItemforgeResult};

/// Fallback clone template used when a definition carries no `_proto`
pub const DEFAULT_CLONE_TEMPLATE: &str = "66b37eb4acff495a29492407";

/// Nested `_props` sub-object of a definition document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DefinitionProps {
    /// Display name override
    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// Description override
    #[serde(rename = "Description")]
    pub description: Option<String>,

    /// Per-item asset override, nested form
    #[serde(rename = "BundleKey")]
    pub bundle_key: Option<String>,
}

/// A parsed item-definition document
///
/// Field names mirror the authored JSON. `external_id` is the only field
/// required for processing; its absence makes the file a skip, not an error,
/// so it is optional at the parse level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemDefinition {
    /// Human-assigned external id
    #[serde(rename = "_id")]
    pub external_id: Option<String>,

    /// Template item to clone from; falls back to `DEFAULT_CLONE_TEMPLATE`
    #[serde(rename = "_proto")]
    pub clone_template: Option<String>,

    /// Parent category in the destination item table
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,

    /// Parent category in the handbook
    #[serde(rename = "handbookParentId")]
    pub handbook_parent_id: Option<String>,

    /// Handbook price in roubles
    #[serde(rename = "handbookPrice")]
    pub handbook_price: Option<f64>,

    /// Per-item asset override, top-level form (wins over the nested one)
    #[serde(rename = "bundleKey")]
    pub bundle_key: Option<String>,

    /// Nested properties sub-object
    #[serde(rename = "_props", default)]
    pub props: DefinitionProps,
}

impl ItemDefinition {
    /// Parse a definition from raw JSON text
    pub fn from_json(content: &str) -> ItemforgeResult<Self> {
        serde_json::from_str(content).map_err(ItemforgeError::from)
    }

    /// Effective clone template: `_proto` if present and non-empty
    pub fn effective_template(&self) -> &str {
        self.effective_template_or(DEFAULT_CLONE_TEMPLATE)
    }

    /// Like [`effective_template`](Self::effective_template), with a
    /// caller-supplied fallback (configurable per content root)
    pub fn effective_template_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.clone_template.as_deref() {
            Some(tpl) if !tpl.is_empty() => tpl,
            _ => fallback,
        }
    }
}
