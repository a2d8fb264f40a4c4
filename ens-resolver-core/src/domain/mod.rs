//! Domain layer - entities and repositories
//!
//! This module contains the resolution entities and the ports the core
//! depends on.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
