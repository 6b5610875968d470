//! In-Memory Item Table
//!
//! A recording implementation of the ItemCloner port, used by the CLI
//! (which has no live host database) and by tests. Enforces the one rule a
//! real item table would: internal ids are unique.

use std::collections::BTreeMap;

use crate::domain::entities::CloneRequest;
use crate::domain::ports::{CloneError, ItemCloner};
use crate::domain::value_objects::InternalId;

/// Destination item table held in memory
#[derive(Debug, Default)]
pub struct InMemoryItemTable {
    items: BTreeMap<InternalId, CloneRequest>,
}

impl InMemoryItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a registered item by internal id
    pub fn get(&self, id: &InternalId) -> Option<&CloneRequest> {
        self.items.get(id)
    }

    /// Iterate registered items in internal-id order
    pub fn iter(&self) -> impl Iterator<Item = (&InternalId, &CloneRequest)> {
        self.items.iter()
    }
}

impl ItemCloner for InMemoryItemTable {
    fn clone_item(&mut self, request: &CloneRequest) -> Result<(), CloneError> {
        let id = request.new_internal_id.clone();
        if self.items.contains_key(&id) {
            return Err(CloneError::DuplicateId(id));
        }
        self.items.insert(id, request.clone());
        Ok(())
    }
}
