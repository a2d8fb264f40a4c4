//! Error handling for the resolver core
//!
//! This module defines the error types used throughout the resolver core.

use thiserror::Error;

/// Resolver error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Lookup timed out after {0} ms")]
    Timeout(u64),

    #[error("Lookup returned no result")]
    EmptyResult,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResolverError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a lookup error
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Message surfaced to the user, if the failure carries one.
    ///
    /// Timeouts and empty results are reported without a message so the
    /// caller falls back to its default text.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Timeout(_) | Self::EmptyResult => None,
            Self::Config(msg)
            | Self::Validation(msg)
            | Self::Network(msg)
            | Self::Lookup(msg)
            | Self::Internal(msg) => Some(msg.clone()),
        }
    }
}

impl From<hex::FromHexError> for ResolverError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for ResolverError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

impl From<ethers::providers::ProviderError> for ResolverError {
    fn from(err: ethers::providers::ProviderError) -> Self {
        Self::network(format!("Provider error: {}", err))
    }
}
