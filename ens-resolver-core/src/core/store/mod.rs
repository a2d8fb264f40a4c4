//! Resolution state store
//!
//! Holds the request map and selection for each resolution direction. All
//! mutation goes through `dispatch`, which runs the reducers and then
//! publishes the event on the direction's event bus.

pub mod requests;
pub mod selection;
pub mod selectors;

pub use requests::RequestStore;
pub use selection::SelectionState;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use crate::domain::entities::events::{AddressEvent, DomainEvent, ResolutionEvent};
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::shared::constants::EVENT_BUS_CAPACITY;

/// Request map plus selection for one direction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionState<D> {
    pub requests: RequestStore<D>,
    pub selection: SelectionState,
}

impl<D> Default for DirectionState<D> {
    fn default() -> Self {
        Self {
            requests: RequestStore::default(),
            selection: SelectionState::default(),
        }
    }
}

impl<D: Clone> DirectionState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, event: &ResolutionEvent<D>) {
        self.requests.reduce(event);
        self.selection.reduce(event);
    }
}

/// Snapshot of both directions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnsState {
    pub domains: DirectionState<DomainData>,
    pub addresses: DirectionState<ReverseData>,
}

/// Shared, observable state for one direction
pub struct SharedDirection<D> {
    state: Arc<RwLock<DirectionState<D>>>,
    events: broadcast::Sender<ResolutionEvent<D>>,
}

impl<D> Clone for SharedDirection<D> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            events: self.events.clone(),
        }
    }
}

impl<D: Clone + std::fmt::Debug + Send + Sync + 'static> SharedDirection<D> {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(DirectionState::new())),
            events,
        }
    }

    /// Apply `event` to the state, then publish it
    pub async fn dispatch(&self, event: ResolutionEvent<D>) {
        log::debug!("Dispatching {:?}", event);
        {
            let mut state = self.state.write().await;
            state.reduce(&event);
        }
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    /// Run a selector against the current state
    pub async fn select<R>(&self, selector: impl FnOnce(&DirectionState<D>) -> R) -> R {
        let state = self.state.read().await;
        selector(&state)
    }

    pub async fn snapshot(&self) -> DirectionState<D> {
        self.state.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResolutionEvent<D>> {
        self.events.subscribe()
    }
}

impl<D: Clone + std::fmt::Debug + Send + Sync + 'static> Default for SharedDirection<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Store handle shared by the facade, the workers and any observer
#[derive(Clone, Default)]
pub struct EnsStore {
    domains: SharedDirection<DomainData>,
    addresses: SharedDirection<ReverseData>,
}

impl EnsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domains(&self) -> &SharedDirection<DomainData> {
        &self.domains
    }

    pub fn addresses(&self) -> &SharedDirection<ReverseData> {
        &self.addresses
    }

    pub async fn dispatch_domain(&self, event: DomainEvent) {
        self.domains.dispatch(event).await;
    }

    pub async fn dispatch_address(&self, event: AddressEvent) {
        self.addresses.dispatch(event).await;
    }

    pub fn subscribe_domain(&self) -> broadcast::Receiver<DomainEvent> {
        self.domains.subscribe()
    }

    pub fn subscribe_address(&self) -> broadcast::Receiver<AddressEvent> {
        self.addresses.subscribe()
    }

    pub async fn snapshot(&self) -> EnsState {
        EnsState {
            domains: self.domains.snapshot().await,
            addresses: self.addresses.snapshot().await,
        }
    }
}
