//! File System Definition Repository
//!
//! Loads item definitions from a content directory, one JSON file per item.

use std::path::Path;

use crate::domain::entities::ItemDefinition;
use crate::domain::ports::{DefinitionFile, DefinitionRepository, FileSystem};
use crate::error::{ItemforgeError, ItemforgeResult};

/// Definition repository that scans a directory through the FileSystem port
///
/// Only `.json` files are considered. Read and parse failures are recorded
/// per file so one broken document never hides the rest of the directory.
pub struct FsDefinitionRepository<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> FsDefinitionRepository<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> DefinitionRepository for FsDefinitionRepository<FS> {
    fn load_all(&self, source: &Path) -> ItemforgeResult<Vec<DefinitionFile>> {
        let mut files = Vec::new();

        for path in self
            .fs
            .list_dir(source)
            .map_err(|e| std::io::Error::other(e.to_string()))?
        {
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let parsed = match self.fs.read(&path) {
                Ok(content) => {
                    ItemDefinition::from_json(&content).map_err(|e| {
                        ItemforgeError::InvalidDefinition {
                            file: path.clone(),
                            message: e.to_string(),
                        }
                    })
                }
                Err(e) => Err(ItemforgeError::InvalidDefinition {
                    file: path.clone(),
                    message: e.to_string(),
                }),
            };

            files.push(DefinitionFile { path, parsed });
        }

        Ok(files)
    }
}
