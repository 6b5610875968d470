//! ItemCloner port - the external clone-item collaborator
//!
//! The destination item table is owned entirely by the collaborator behind
//! this trait (a live game-server database in real hosts, an in-memory
//! table in tests and the CLI). The pipeline only hands over fully-resolved
//! clone requests and records the outcome; it never retries.
//!
//! `clone_item` takes `&mut self`: calls into the collaborator are
//! serialized, so the destination never needs to support concurrent writers.

use thiserror::Error;

use crate::domain::entities::CloneRequest;
use crate::domain::value_objects::InternalId;

/// Clone operation failures, as reported by the collaborator
#[derive(Debug, Error)]
pub enum CloneError {
    /// An item with this internal id is already registered
    #[error("item with internal id {0} already registered")]
    DuplicateId(InternalId),

    /// The collaborator rejected the request for its own reasons
    #[error("clone rejected: {0}")]
    Rejected(String),
}

/// Abstract clone-item operation on the destination item table
pub trait ItemCloner {
    /// Derive a new item from a template and register it
    fn clone_item(&mut self, request: &CloneRequest) -> Result<(), CloneError>;
}
