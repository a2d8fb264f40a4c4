//! Infrastructure layer - external integrations
//!
//! This module contains the ethers-backed ENS node, notification sinks and
//! configuration loading.

pub mod config;
pub mod node;
pub mod notifier;

// Re-export infrastructure components
pub use config::*;
pub use node::*;
pub use notifier::*;
