//! Load use case module

mod options;
mod result;
mod use_case;

pub use options::LoadOptions;
pub use result::{LoadResult, RegisteredItem};
pub use use_case::LoadUseCase;
