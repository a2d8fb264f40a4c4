//! Notification port
//!
//! Transient user-facing alerts raised by the resolution workers.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::shared::types::Severity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn danger(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
            duration,
        }
    }
}

/// Notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
