//! Domain Value Objects
//!
//! Immutable, validated values with no identity of their own.

pub mod internal_id;
pub mod locale;

pub use internal_id::InternalId;
pub use locale::{LocaleRecord, DEFAULT_LANGUAGE_TAG};
