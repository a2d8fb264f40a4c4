//! ENS Resolver Core
//!
//! Forward (name to address) and reverse (address to name) ENS resolution
//! for wallet front-ends.
//!
//! ## Architecture
//!
//! - **Core**: Request store, selection tracking and resolution workers
//! - **Domain**: Entities, events and the ports the workers depend on
//! - **Infrastructure**: Ethers-backed node, notifiers and configuration
//! - **Shared**: Common types, constants, and utilities
//!
//! Every resolution request is first dispatched into the store as
//! `Requested`, then pushed into a single-slot sliding buffer. One worker per
//! direction drains the buffer, so a burst of requests collapses to the most
//! recent one, and each drained request ends in exactly one terminal event.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ens_resolver_core::{init_resolver_core, selectors};
//!
//! # async fn run() -> Result<(), ens_resolver_core::ResolverError> {
//! let core = init_resolver_core().await?;
//! let mut events = core.store().subscribe_domain();
//!
//! core.resolve_domain("vitalik.eth", false).await?;
//! while let Ok(event) = events.recv().await {
//!     if event.is_terminal() {
//!         break;
//!     }
//! }
//!
//! let state = core.store().snapshot().await;
//! println!("{:?}", selectors::current_resolved_address(&state.domains));
//! core.shutdown().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

// Re-export specific components
pub use crate::core::resolution::{sliding_buffer, AddressLookup, DomainLookup, Resolve, ResolutionWorker};
pub use crate::core::resolution::{RequestReceiver, RequestSender};
pub use crate::core::store::{selectors, DirectionState, EnsState, EnsStore, SharedDirection};

// Re-export domain entities
pub use crate::domain::entities::{
    AddressEvent, DomainData, DomainEvent, RequestStatus, ResolutionEvent, ResolutionFailure, ResolutionRequest,
    ResolveRequest, ReverseData,
};
pub use crate::domain::repositories::{EnsNode, Notification, Notifier};

// Re-export infrastructure and shared types
pub use crate::infrastructure::{ChannelNotifier, EthersNode, LogNotifier, ResolverConfig};
pub use crate::shared::error::ResolverError;
pub use crate::shared::types::{Network, ResolverResult, Severity};

use crate::shared::utils::{normalize_address, normalize_name};

/// Initialize logging; safe to call more than once
pub fn init() {
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the resolver core with configuration from .env or safe defaults
pub async fn init_resolver_core() -> ResolverResult<ResolverCore> {
    let config = ResolverConfig::from_env()?;
    let node = EthersNode::from_config(&config)?;
    log::info!("Using {} via {}", config.network, config.rpc_url(config.network));

    Ok(ResolverCore::start(&config, Arc::new(node), Arc::new(LogNotifier)))
}

/// Main resolver struct: owns the store, the request buffers and both workers
pub struct ResolverCore {
    store: EnsStore,
    network: Network,
    domain_requests: Mutex<Option<RequestSender<ResolveRequest>>>,
    address_requests: Mutex<Option<RequestSender<ResolveRequest>>>,
    workers: Vec<JoinHandle<()>>,
}

impl ResolverCore {
    /// Spawn both workers on the current runtime
    pub fn start(config: &ResolverConfig, node: Arc<dyn EnsNode>, notifier: Arc<dyn Notifier>) -> Self {
        let store = EnsStore::new();
        let duration = config.notification_duration();

        let (domain_tx, domain_rx) = sliding_buffer();
        let domain_worker = ResolutionWorker::new(
            DomainLookup::new(Arc::clone(&node)),
            store.domains().clone(),
            Arc::clone(&notifier),
            config.network,
        )
        .with_notification_duration(duration);

        let (address_tx, address_rx) = sliding_buffer();
        let address_worker = ResolutionWorker::new(
            AddressLookup::new(node),
            store.addresses().clone(),
            notifier,
            config.network,
        )
        .with_notification_duration(duration);

        Self {
            store,
            network: config.network,
            domain_requests: Mutex::new(Some(domain_tx)),
            address_requests: Mutex::new(Some(address_tx)),
            workers: vec![domain_worker.spawn(domain_rx), address_worker.spawn(address_rx)],
        }
    }

    /// Request forward resolution of `name`
    pub async fn resolve_domain(&self, name: &str, refresh: bool) -> ResolverResult<()> {
        let request = ResolveRequest::new(normalize_name(name), refresh);
        submit(self.store.domains(), &self.domain_requests, request).await
    }

    /// Request reverse resolution of `address`
    pub async fn resolve_address(&self, address: &str, refresh: bool) -> ResolverResult<()> {
        let request = ResolveRequest::new(normalize_address(address), refresh);
        submit(self.store.addresses(), &self.address_requests, request).await
    }

    pub fn store(&self) -> &EnsStore {
        &self.store
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Close both buffers and wait for the workers to drain them
    pub async fn shutdown(mut self) -> ResolverResult<()> {
        self.domain_requests.get_mut().take();
        self.address_requests.get_mut().take();
        for worker in std::mem::take(&mut self.workers) {
            worker.await?;
        }
        log::info!("Resolver core stopped");
        Ok(())
    }
}

/// Record `Requested`, then hand the request to the worker.
///
/// The lock spans both steps so the store's newest request is always the one
/// sitting in the buffer.
async fn submit<D>(
    direction: &SharedDirection<D>,
    requests: &Mutex<Option<RequestSender<ResolveRequest>>>,
    request: ResolveRequest,
) -> ResolverResult<()>
where
    D: Clone + std::fmt::Debug + Send + Sync + 'static,
{
    let requests = requests.lock().await;
    let sender = match requests.as_ref() {
        Some(sender) if !sender.is_closed() => sender,
        _ => return Err(ResolverError::internal("Resolution worker is not running")),
    };

    direction.dispatch(ResolutionEvent::from(&request)).await;
    let key = request.key.clone();
    if let Err(err) = sender.send(request) {
        direction
            .dispatch(ResolutionEvent::Failed { key, error: (&err).into() })
            .await;
        return Err(err);
    }
    Ok(())
}

impl Drop for ResolverCore {
    fn drop(&mut self) {
        if !self.workers.is_empty() {
            log::debug!("ResolverCore dropped without shutdown, workers stop once their buffers close");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::node_repository::MockEnsNode;
    use crate::shared::constants::ADDRESS_FAILURE_MESSAGE;
    use async_trait::async_trait;

    /// Node that panics when asked for `boom.eth`
    struct PanickingNode;

    #[async_trait]
    impl EnsNode for PanickingNode {
        async fn resolve_domain(&self, name: &str, _testnet: bool) -> Result<Option<DomainData>, ResolverError> {
            if name == "boom.eth" {
                panic!("node crashed on {}", name);
            }
            Ok(Some(DomainData::new(name, OWNER.to_string(), RESOLVED.to_string())))
        }

        async fn reverse_resolve(&self, _address: &str, _testnet: bool) -> Result<Option<ReverseData>, ResolverError> {
            Ok(None)
        }
    }

    const OWNER: &str = "0x5555763613a12D8F3e73be831DFf8598089d3dCa";
    const RESOLVED: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn terminal_key<D>(event: &ResolutionEvent<D>) -> Option<&str> {
        event.is_terminal().then(|| event.key())
    }

    #[tokio::test]
    async fn test_resolve_domain_end_to_end() {
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain()
            .withf(|name: &str, testnet: &bool| name == "alice.eth" && !*testnet)
            .times(1)
            .returning(|name, _| Ok(Some(DomainData::new(name, OWNER.to_string(), RESOLVED.to_string()))));
        let (notifier, mut notifications) = ChannelNotifier::new();
        let core = ResolverCore::start(&ResolverConfig::default(), Arc::new(node), Arc::new(notifier));
        let mut events = core.store().subscribe_domain();

        core.resolve_domain("Alice.eth", false).await.unwrap();
        assert_eq!(
            events.recv().await.unwrap(),
            ResolutionEvent::Requested { key: "alice.eth".to_string(), refresh: false }
        );
        let terminal = events.recv().await.unwrap();
        assert!(matches!(terminal, ResolutionEvent::Succeeded { .. }));
        assert_eq!(terminal_key(&terminal), Some("alice.eth"));

        let state = core.store().snapshot().await;
        let entry = state.domains.requests.get("alice.eth").unwrap();
        assert_eq!(entry.status, RequestStatus::Success);
        assert!(!entry.error);
        assert_eq!(selectors::current_key(&state.domains), Some("alice.eth"));
        assert_eq!(selectors::current_resolved_address(&state.domains), Some(RESOLVED));
        assert_eq!(selectors::current_owner_address(&state.domains), Some(OWNER));
        assert!(!selectors::is_resolving(&state.domains));

        // Same key again is served from the store
        core.resolve_domain("alice.eth", false).await.unwrap();
        events.recv().await.unwrap();
        assert_eq!(events.recv().await.unwrap(), ResolutionEvent::Cached { key: "alice.eth".to_string() });

        core.shutdown().await.unwrap();
        assert!(notifications.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_address_empty_result() {
        let address = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
        let mut node = MockEnsNode::new();
        node.expect_reverse_resolve().times(1).returning(|_, _| Ok(None));
        let (notifier, mut notifications) = ChannelNotifier::new();
        let config = ResolverConfig {
            notification_ms: 2000,
            ..ResolverConfig::default()
        };
        let core = ResolverCore::start(&config, Arc::new(node), Arc::new(notifier));
        let mut events = core.store().subscribe_address();

        core.resolve_address(address, false).await.unwrap();
        events.recv().await.unwrap();
        assert_eq!(
            events.recv().await.unwrap(),
            ResolutionEvent::Failed { key: address.to_string(), error: ResolutionFailure::empty() }
        );

        let state = core.store().snapshot().await;
        assert!(state.addresses.requests.get(address).unwrap().is_failed());
        assert_eq!(selectors::current_key(&state.addresses), None);

        let notification = notifications.try_recv().unwrap();
        assert_eq!(notification.severity, Severity::Danger);
        assert_eq!(notification.message, ADDRESS_FAILURE_MESSAGE);
        assert_eq!(notification.duration, std::time::Duration::from_millis(2000));

        core.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_directions_are_independent() {
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain()
            .times(1)
            .returning(|name, _| Ok(Some(DomainData::new(name, OWNER.to_string(), RESOLVED.to_string()))));
        node.expect_reverse_resolve()
            .times(1)
            .returning(|address, _| Ok(Some(ReverseData::new(address, "alice.eth"))));
        let (notifier, _notifications) = ChannelNotifier::new();
        let core = ResolverCore::start(&ResolverConfig::default(), Arc::new(node), Arc::new(notifier));
        let mut domain_events = core.store().subscribe_domain();
        let mut address_events = core.store().subscribe_address();

        core.resolve_domain("alice.eth", false).await.unwrap();
        core.resolve_address(RESOLVED, false).await.unwrap();
        domain_events.recv().await.unwrap();
        address_events.recv().await.unwrap();
        assert!(domain_events.recv().await.unwrap().is_terminal());
        assert!(address_events.recv().await.unwrap().is_terminal());

        let state = core.store().snapshot().await;
        assert_eq!(selectors::current_key(&state.domains), Some("alice.eth"));
        assert_eq!(selectors::current_key(&state.addresses), Some(RESOLVED.to_lowercase().as_str()));
        assert_eq!(selectors::current_reverse_name(&state.addresses), Some("alice.eth"));

        core.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rapid_fire_only_latest_is_looked_up() {
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain()
            .withf(|name: &str, _testnet: &bool| name == "c.eth")
            .times(1)
            .returning(|name, _| Ok(Some(DomainData::new(name, OWNER.to_string(), RESOLVED.to_string()))));
        let (notifier, mut notifications) = ChannelNotifier::new();
        let core = ResolverCore::start(&ResolverConfig::default(), Arc::new(node), Arc::new(notifier));
        let mut events = core.store().subscribe_domain();

        // No await point yields to the worker until all three are submitted
        for key in ["a.eth", "b.eth", "c.eth"] {
            core.resolve_domain(key, false).await.unwrap();
        }
        for key in ["a.eth", "b.eth", "c.eth"] {
            assert_eq!(
                events.recv().await.unwrap(),
                ResolutionEvent::Requested { key: key.to_string(), refresh: false }
            );
        }
        let terminal = events.recv().await.unwrap();
        assert_eq!(terminal_key(&terminal), Some("c.eth"));
        assert!(matches!(terminal, ResolutionEvent::Succeeded { .. }));

        let state = core.store().snapshot().await;
        assert!(state.domains.requests.get("a.eth").unwrap().is_pending());
        assert!(state.domains.requests.get("b.eth").unwrap().is_pending());
        assert!(state.domains.requests.get("c.eth").unwrap().is_success());
        assert_eq!(selectors::current_key(&state.domains), Some("c.eth"));

        core.shutdown().await.unwrap();
        assert!(events.try_recv().is_err());
        assert!(notifications.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_resolve_the_newest_request() {
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain()
            .returning(|name, _| Ok(Some(DomainData::new(name, OWNER.to_string(), RESOLVED.to_string()))));
        let (notifier, _notifications) = ChannelNotifier::new();
        let core = Arc::new(ResolverCore::start(&ResolverConfig::default(), Arc::new(node), Arc::new(notifier)));
        let mut events = core.store().subscribe_domain();

        let callers: Vec<_> = (0..8)
            .map(|i| {
                let core = Arc::clone(&core);
                tokio::spawn(async move { core.resolve_domain(&format!("user{}.eth", i), false).await })
            })
            .collect();
        for caller in callers {
            caller.await.unwrap().unwrap();
        }
        let store = core.store().clone();
        let core = Arc::try_unwrap(core).ok().expect("callers have finished");
        core.shutdown().await.unwrap();

        let mut newest = None;
        let mut newest_resolved = false;
        while let Ok(event) = events.try_recv() {
            match event {
                ResolutionEvent::Requested { key, .. } => {
                    newest = Some(key);
                    newest_resolved = false;
                }
                other if Some(other.key()) == newest.as_deref() => newest_resolved = true,
                _ => {}
            }
        }
        assert!(newest_resolved);

        let state = store.snapshot().await;
        let newest = newest.unwrap();
        assert_eq!(selectors::current_key(&state.domains), Some(newest.as_str()));
        assert!(state.domains.requests.get(&newest).unwrap().is_success());
    }

    #[tokio::test]
    async fn test_panicking_node_fails_request_and_keeps_worker() {
        let (notifier, mut notifications) = ChannelNotifier::new();
        let core = ResolverCore::start(&ResolverConfig::default(), Arc::new(PanickingNode), Arc::new(notifier));
        let mut events = core.store().subscribe_domain();

        core.resolve_domain("boom.eth", false).await.unwrap();
        events.recv().await.unwrap();
        assert!(matches!(events.recv().await.unwrap(), ResolutionEvent::Failed { .. }));
        assert_eq!(notifications.try_recv().unwrap().severity, Severity::Danger);

        core.resolve_domain("alice.eth", false).await.unwrap();
        events.recv().await.unwrap();
        assert!(matches!(events.recv().await.unwrap(), ResolutionEvent::Succeeded { .. }));

        let state = core.store().snapshot().await;
        assert!(state.domains.requests.get("boom.eth").unwrap().is_failed());
        assert_eq!(selectors::current_key(&state.domains), Some("alice.eth"));
        core.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_stopped_worker_leaves_no_pending_entry() {
        let direction: SharedDirection<DomainData> = SharedDirection::new();
        let (tx, rx) = sliding_buffer();
        drop(rx);
        let requests = Mutex::new(Some(tx));

        let result = submit(&direction, &requests, ResolveRequest::new("a.eth", false)).await;
        assert!(matches!(result, Err(ResolverError::Internal(_))));

        let state = direction.snapshot().await;
        assert!(state.requests.is_empty());
        assert_eq!(state.selection.current_key, None);
    }

    #[tokio::test]
    async fn test_address_keys_ignore_case() {
        let mut node = MockEnsNode::new();
        node.expect_reverse_resolve()
            .times(1)
            .returning(|address, _| Ok(Some(ReverseData::new(address, "alice.eth"))));
        let (notifier, _notifications) = ChannelNotifier::new();
        let core = ResolverCore::start(&ResolverConfig::default(), Arc::new(node), Arc::new(notifier));
        let mut events = core.store().subscribe_address();
        let lowercase = RESOLVED.to_lowercase();

        core.resolve_address(RESOLVED, false).await.unwrap();
        events.recv().await.unwrap();
        assert!(matches!(events.recv().await.unwrap(), ResolutionEvent::Succeeded { .. }));

        core.resolve_address(&lowercase, false).await.unwrap();
        events.recv().await.unwrap();
        assert_eq!(events.recv().await.unwrap(), ResolutionEvent::Cached { key: lowercase.clone() });

        let state = core.store().snapshot().await;
        assert_eq!(state.addresses.requests.len(), 1);
        assert_eq!(core.network(), Network::Mainnet);
        core.shutdown().await.unwrap();
    }

    #[test]
    fn test_version_info() {
        assert_eq!(NAME, "ens-resolver-core");
        assert!(!VERSION.is_empty());
        init();
        init();
    }
}
