//! Resolution workers
//!
//! This module contains the sliding request buffer, the per-direction lookup
//! strategies and the worker loop that ties them to the store.

pub mod buffer;
pub mod lookup;
pub mod worker;

// Re-export resolution components
pub use buffer::{sliding_buffer, RequestReceiver, RequestSender};
pub use lookup::{AddressLookup, DomainLookup, Resolve};
pub use worker::{plan, Plan, ResolutionWorker};
