//! Application layer
//!
//! Use cases orchestrating domain services through ports.

pub mod load;

pub use load::{LoadOptions, LoadResult, LoadUseCase, RegisteredItem};
