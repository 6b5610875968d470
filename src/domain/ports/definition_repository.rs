//! DefinitionRepository port - abstraction for loading item definitions
//!
//! Definitions are the JSON files in the content directory, one per item.
//! Parse failures are per-file data, not batch failures: a bad file must
//! never keep the rest of the directory from loading.

use std::path::{Path, PathBuf};

use crate::domain::entities::ItemDefinition;
use crate::error::{ItemforgeError, ItemforgeResult};

/// One scanned definition file, parsed or not
#[derive(Debug)]
pub struct DefinitionFile {
    /// Where the document came from
    pub path: PathBuf,
    /// Parse outcome; `Err` carries the per-file failure
    pub parsed: Result<ItemDefinition, ItemforgeError>,
}

/// Abstract repository for loading item definitions
///
/// Implemented by the infrastructure layer (`FsDefinitionRepository`).
pub trait DefinitionRepository {
    /// Load every definition file from a source directory
    ///
    /// An absent directory yields an empty list - a run over nothing is a
    /// no-op, not an error.
    fn load_all(&self, source: &Path) -> ItemforgeResult<Vec<DefinitionFile>>;
}
