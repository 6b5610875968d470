//! Load Result
//!
//! Result types for load runs.

use std::path::PathBuf;

use crate::domain::value_objects::InternalId;

/// One item accepted by (or, in a dry run, destined for) the collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredItem {
    pub external_id: String,
    pub internal_id: InternalId,
}

/// Result of a load run
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Items registered (or resolved, under dry run)
    pub registered: Vec<RegisteredItem>,
    /// Definition files skipped for lack of an external id
    pub skipped: Vec<PathBuf>,
    /// Per-file failures: unparseable definitions, collaborator rejections
    pub errors: Vec<String>,
    /// Degraded resolutions: asset fallbacks, missing/unreadable locales
    pub warnings: Vec<String>,
    /// Total definition files scanned
    pub definition_count: usize,
}

impl LoadResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
