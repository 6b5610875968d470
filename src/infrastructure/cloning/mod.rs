//! Clone-collaborator implementations

mod memory;

pub use memory::InMemoryItemTable;
