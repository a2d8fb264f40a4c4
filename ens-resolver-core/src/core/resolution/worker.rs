//! Resolution worker
//!
//! One long-lived task per direction. It drains requests from a sliding
//! buffer one at a time and serves cache hits without touching the network.
//! Each lookup runs in its own task, raced against a fixed timeout, so a
//! panicking node still ends in exactly one terminal event.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use crate::core::resolution::buffer::RequestReceiver;
use crate::core::resolution::lookup::Resolve;
use crate::core::store::selectors::has_cached_data;
use crate::core::store::{DirectionState, SharedDirection};
use crate::domain::entities::events::{ResolutionEvent, ResolveRequest};
use crate::domain::repositories::notifier::{Notification, Notifier};
use crate::shared::constants::{DEFAULT_NOTIFICATION_MS, RESOLUTION_TIMEOUT, RESOLUTION_TIMEOUT_MS};
use crate::shared::error::ResolverError;
use crate::shared::types::{Network, ResolverResult};

/// What to do with a drained request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    ServeCached,
    Lookup,
}

/// Decide from an explicit state snapshot whether a request needs the network
pub fn plan<D: Clone>(request: &ResolveRequest, state: &DirectionState<D>) -> Plan {
    if !request.refresh && has_cached_data(state, &request.key) {
        Plan::ServeCached
    } else {
        Plan::Lookup
    }
}

pub struct ResolutionWorker<R: Resolve> {
    resolver: Arc<R>,
    store: SharedDirection<R::Data>,
    notifier: Arc<dyn Notifier>,
    network: Network,
    notification_duration: Duration,
}

impl<R: Resolve> ResolutionWorker<R> {
    pub fn new(resolver: R, store: SharedDirection<R::Data>, notifier: Arc<dyn Notifier>, network: Network) -> Self {
        Self {
            resolver: Arc::new(resolver),
            store,
            notifier,
            network,
            notification_duration: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
        }
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    pub fn spawn(self, receiver: RequestReceiver<ResolveRequest>) -> JoinHandle<()> {
        tokio::spawn(self.run(receiver))
    }

    /// Process requests until every sender is dropped
    pub async fn run(self, mut receiver: RequestReceiver<ResolveRequest>) {
        log::info!("{} resolution worker started on {}", self.resolver.kind(), self.network);
        while let Some(request) = receiver.recv().await {
            let event = self.handle(request).await;
            self.store.dispatch(event).await;
        }
        log::info!("{} resolution worker stopped", self.resolver.kind());
    }

    /// Turn one request into its terminal event, notifying on failure
    pub async fn handle(&self, request: ResolveRequest) -> ResolutionEvent<R::Data> {
        let decision = self.store.select(|state| plan(&request, state)).await;
        if decision == Plan::ServeCached {
            log::debug!("Serving {} {} from cache", self.resolver.kind(), request.key);
            return ResolutionEvent::Cached { key: request.key };
        }

        match self.lookup(&request.key).await {
            Ok(data) => {
                log::info!("Resolved {} {}", self.resolver.kind(), request.key);
                ResolutionEvent::Succeeded { key: request.key, data }
            }
            Err(err) => {
                log::warn!("Failed to resolve {} {}: {}", self.resolver.kind(), request.key, err);
                self.notify_failure(&err);
                ResolutionEvent::Failed {
                    key: request.key,
                    error: (&err).into(),
                }
            }
        }
    }

    async fn lookup(&self, key: &str) -> ResolverResult<R::Data> {
        self.resolver.validate(key)?;

        let resolver = Arc::clone(&self.resolver);
        let network = self.network;
        let owned_key = key.to_string();
        let mut task = tokio::spawn(async move { resolver.resolve(&owned_key, network).await });

        match tokio::time::timeout(RESOLUTION_TIMEOUT, &mut task).await {
            Ok(Ok(Ok(Some(data)))) => Ok(data),
            Ok(Ok(Ok(None))) => Err(ResolverError::EmptyResult),
            Ok(Ok(Err(err))) => Err(err),
            Ok(Err(join_err)) => {
                log::error!("{} lookup for {} panicked", self.resolver.kind(), key);
                Err(join_err.into())
            }
            Err(_) => {
                task.abort();
                Err(ResolverError::Timeout(RESOLUTION_TIMEOUT_MS))
            }
        }
    }

    fn notify_failure(&self, err: &ResolverError) {
        let message = err
            .user_message()
            .unwrap_or_else(|| self.resolver.failure_message().to_string());
        self.notifier
            .notify(Notification::danger(message, self.notification_duration));
    }
}
