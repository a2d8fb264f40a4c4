//! Domain repositories
//!
//! This module contains the traits the resolution workers depend on:
//! the ENS node and the notification sink.

pub mod node_repository;
pub mod notifier;

// Re-export repositories
pub use node_repository::*;
pub use notifier::*;
