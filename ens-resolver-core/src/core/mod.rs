//! Core resolution functionality
//!
//! This module contains the request store with its reducers and selectors,
//! and the resolution workers that feed it.

pub mod store;
pub mod resolution;
