//! Domain entities and value objects
//!
//! This module contains the core domain entities: resolution records, the
//! per-key request entry and the events that drive it.

pub mod records;
pub mod request;
pub mod events;

// Re-export entities
pub use records::*;
pub use request::*;
pub use events::*;
