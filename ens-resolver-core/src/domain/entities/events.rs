//! Resolution events
//!
//! The four event shapes exchanged between the resolution workers and the
//! request store. Every state change goes through one of these.

use serde::{Deserialize, Serialize};
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::shared::error::ResolverError;

/// A request to resolve `key`, as pushed into a worker's buffer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveRequest {
    pub key: String,
    pub refresh: bool,
}

impl ResolveRequest {
    pub fn new(key: impl Into<String>, refresh: bool) -> Self {
        Self {
            key: key.into(),
            refresh,
        }
    }
}

/// Why a lookup failed. `message` is `None` for timeouts and empty results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResolutionFailure {
    pub message: Option<String>,
}

impl ResolutionFailure {
    pub fn empty() -> Self {
        Self { message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl From<&ResolverError> for ResolutionFailure {
    fn from(err: &ResolverError) -> Self {
        Self {
            message: err.user_message(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolutionEvent<D> {
    Requested { key: String, refresh: bool },
    Succeeded { key: String, data: D },
    Failed { key: String, error: ResolutionFailure },
    Cached { key: String },
}

impl<D> ResolutionEvent<D> {
    pub fn key(&self) -> &str {
        match self {
            Self::Requested { key, .. }
            | Self::Succeeded { key, .. }
            | Self::Failed { key, .. }
            | Self::Cached { key } => key,
        }
    }

    /// Whether this event ends a lookup
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Requested { .. })
    }
}

impl<D> From<&ResolveRequest> for ResolutionEvent<D> {
    fn from(request: &ResolveRequest) -> Self {
        Self::Requested {
            key: request.key.clone(),
            refresh: request.refresh,
        }
    }
}

pub type DomainEvent = ResolutionEvent<DomainData>;
pub type AddressEvent = ResolutionEvent<ReverseData>;
