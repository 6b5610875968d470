//! Domain layer
//!
//! Entities, value objects, pure resolution services, and the ports the
//! application layer is parameterized by.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
