//! Resolution request entity
//!
//! One entry per lookup key in the request store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Success,
    Failed,
}

/// Request state for a single key.
///
/// `data` and `error` are never both set. A pending entry may still hold the
/// data of an earlier success so it can be served from cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionRequest<D> {
    pub status: RequestStatus,
    pub data: Option<D>,
    pub error: bool,
    pub error_msg: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl<D> ResolutionRequest<D> {
    pub fn pending(data: Option<D>) -> Self {
        Self {
            status: RequestStatus::Pending,
            data,
            error: false,
            error_msg: None,
            updated_at: Utc::now(),
        }
    }

    pub fn success(data: D) -> Self {
        Self {
            status: RequestStatus::Success,
            data: Some(data),
            error: false,
            error_msg: None,
            updated_at: Utc::now(),
        }
    }

    pub fn failed(error_msg: Option<String>) -> Self {
        Self {
            status: RequestStatus::Failed,
            data: None,
            error: true,
            error_msg,
            updated_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_success(&self) -> bool {
        self.status == RequestStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == RequestStatus::Failed
    }
}
