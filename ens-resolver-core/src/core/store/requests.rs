//! Keyed request store
//!
//! Pure state transitions for the per-key request map. Entries are created on
//! the first `Requested` event for a key and are never removed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use chrono::Utc;
use crate::domain::entities::events::ResolutionEvent;
use crate::domain::entities::request::{RequestStatus, ResolutionRequest};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestStore<D> {
    requests: HashMap<String, ResolutionRequest<D>>,
}

impl<D> Default for RequestStore<D> {
    fn default() -> Self {
        Self {
            requests: HashMap::new(),
        }
    }
}

impl<D: Clone> RequestStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ResolutionRequest<D>> {
        self.requests.get(key)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.requests.keys()
    }

    pub fn reduce(&mut self, event: &ResolutionEvent<D>) {
        match event {
            ResolutionEvent::Requested { key, .. } => {
                let cached = self.requests.remove(key).and_then(|entry| entry.data);
                self.requests.insert(key.clone(), ResolutionRequest::pending(cached));
            }
            ResolutionEvent::Succeeded { key, data } => {
                self.requests.insert(key.clone(), ResolutionRequest::success(data.clone()));
            }
            ResolutionEvent::Cached { key } => {
                if let Some(entry) = self.requests.get_mut(key) {
                    entry.status = RequestStatus::Success;
                    entry.error = false;
                    entry.error_msg = None;
                    entry.updated_at = Utc::now();
                }
            }
            ResolutionEvent::Failed { key, error } => {
                self.requests.insert(key.clone(), ResolutionRequest::failed(error.message.clone()));
            }
        }
    }
}
