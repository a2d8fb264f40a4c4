//! Lookup strategies for the two resolution directions

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::domain::repositories::node_repository::EnsNode;
use crate::shared::constants::{ADDRESS_FAILURE_MESSAGE, DOMAIN_FAILURE_MESSAGE};
use crate::shared::types::{Network, ResolverResult};
use crate::shared::utils::{validate_ens_name, validate_ethereum_address};

/// One resolution direction: how to check a key and how to look it up
#[async_trait]
pub trait Resolve: Send + Sync + 'static {
    type Data: Clone + Debug + Send + Sync + 'static;

    /// Short name used in logs
    fn kind(&self) -> &'static str;

    /// Notification text when a failure carries no message
    fn failure_message(&self) -> &'static str;

    fn validate(&self, key: &str) -> ResolverResult<()>;

    /// `Ok(None)` is an empty answer from the node
    async fn resolve(&self, key: &str, network: Network) -> ResolverResult<Option<Self::Data>>;
}

/// Forward lookup: domain name to records
pub struct DomainLookup {
    node: Arc<dyn EnsNode>,
}

impl DomainLookup {
    pub fn new(node: Arc<dyn EnsNode>) -> Self {
        Self { node }
    }
}

#[async_trait]
impl Resolve for DomainLookup {
    type Data = DomainData;

    fn kind(&self) -> &'static str {
        "domain"
    }

    fn failure_message(&self) -> &'static str {
        DOMAIN_FAILURE_MESSAGE
    }

    fn validate(&self, key: &str) -> ResolverResult<()> {
        validate_ens_name(key)
    }

    async fn resolve(&self, key: &str, network: Network) -> ResolverResult<Option<DomainData>> {
        self.node.resolve_domain(key, network.is_testnet()).await
    }
}

/// Reverse lookup: address to primary name
pub struct AddressLookup {
    node: Arc<dyn EnsNode>,
}

impl AddressLookup {
    pub fn new(node: Arc<dyn EnsNode>) -> Self {
        Self { node }
    }
}

#[async_trait]
impl Resolve for AddressLookup {
    type Data = ReverseData;

    fn kind(&self) -> &'static str {
        "address"
    }

    fn failure_message(&self) -> &'static str {
        ADDRESS_FAILURE_MESSAGE
    }

    fn validate(&self, key: &str) -> ResolverResult<()> {
        validate_ethereum_address(key)
    }

    async fn resolve(&self, key: &str, network: Network) -> ResolverResult<Option<ReverseData>> {
        self.node.reverse_resolve(key, network.is_testnet()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::node_repository::MockEnsNode;

    #[tokio::test]
    async fn test_domain_lookup_passes_testnet_flag() {
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain()
            .withf(|name: &str, testnet: &bool| name == "alice.eth" && *testnet)
            .times(1)
            .returning(|name, _| Ok(Some(DomainData::new(name, "0x1".to_string(), "0x2".to_string()))));

        let lookup = DomainLookup::new(Arc::new(node));
        let data = lookup.resolve("alice.eth", Network::Sepolia).await.unwrap().unwrap();
        assert_eq!(data.resolved_address, "0x2");
    }

    #[tokio::test]
    async fn test_address_lookup_uses_reverse_resolution() {
        let address = "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6";
        let mut node = MockEnsNode::new();
        node.expect_resolve_domain().never();
        node.expect_reverse_resolve()
            .withf(move |requested: &str, testnet: &bool| requested == address && !*testnet)
            .times(1)
            .returning(|address, _| Ok(Some(ReverseData::new(address, "alice.eth"))));

        let lookup = AddressLookup::new(Arc::new(node));
        assert!(lookup.validate(address).is_ok());
        let data = lookup.resolve(address, Network::Mainnet).await.unwrap().unwrap();
        assert_eq!(data.name, "alice.eth");
    }

    #[test]
    fn test_validation_per_direction() {
        let domains = DomainLookup::new(Arc::new(MockEnsNode::new()));
        let addresses = AddressLookup::new(Arc::new(MockEnsNode::new()));

        assert!(domains.validate("alice.eth").is_ok());
        assert!(domains.validate("0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6").is_err());
        assert!(addresses.validate("alice.eth").is_err());
    }
}
