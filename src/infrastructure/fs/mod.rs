//! File system implementations of the FileSystem port

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;
