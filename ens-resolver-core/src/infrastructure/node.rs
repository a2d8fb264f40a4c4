//! Ethers-backed ENS node
//!
//! Forward lookups read the owner straight from the ENS registry and the
//! resolved address through the provider's resolver support. Reverse lookups
//! go through the provider's `addr.reverse` handling.

use async_trait::async_trait;
use ethers::{
    core::types::{transaction::eip2718::TypedTransaction, Address as EthAddress, Bytes, TransactionRequest},
    providers::{Http, Middleware, Provider, ProviderError},
    utils::{id, to_checksum},
};
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::domain::repositories::node_repository::EnsNode;
use crate::infrastructure::config::ResolverConfig;
use crate::shared::constants::{ENS_REGISTRY_ADDRESS, ZERO_ADDRESS};
use crate::shared::error::ResolverError;
use crate::shared::types::{Network, ResolverResult};
use crate::shared::utils::namehash;

pub struct EthersNode {
    mainnet: Provider<Http>,
    sepolia: Provider<Http>,
    registry: EthAddress,
}

impl EthersNode {
    pub fn new(mainnet_rpc_url: &str, sepolia_rpc_url: &str) -> ResolverResult<Self> {
        let mainnet = Provider::<Http>::try_from(mainnet_rpc_url)
            .map_err(|e| ResolverError::config(format!("Invalid mainnet RPC URL {}: {}", mainnet_rpc_url, e)))?;
        let sepolia = Provider::<Http>::try_from(sepolia_rpc_url)
            .map_err(|e| ResolverError::config(format!("Invalid Sepolia RPC URL {}: {}", sepolia_rpc_url, e)))?;
        let registry = ENS_REGISTRY_ADDRESS
            .parse::<EthAddress>()
            .map_err(|e| ResolverError::internal(format!("Invalid ENS registry address: {}", e)))?;

        Ok(Self {
            mainnet,
            sepolia,
            registry,
        })
    }

    pub fn from_config(config: &ResolverConfig) -> ResolverResult<Self> {
        Self::new(config.rpc_url(Network::Mainnet), config.rpc_url(Network::Sepolia))
    }

    fn provider(&self, testnet: bool) -> &Provider<Http> {
        if testnet {
            &self.sepolia
        } else {
            &self.mainnet
        }
    }

    async fn registry_owner(&self, provider: &Provider<Http>, name: &str) -> ResolverResult<EthAddress> {
        let tx: TypedTransaction = TransactionRequest::new()
            .to(self.registry)
            .data(owner_calldata(name))
            .into();
        let raw = provider.call(&tx, None).await?;
        decode_address_word(&raw)
    }
}

/// Calldata for `owner(bytes32)` on the ENS registry
pub fn owner_calldata(name: &str) -> Bytes {
    let mut data = id("owner(bytes32)").to_vec();
    data.extend_from_slice(&namehash(name));
    Bytes::from(data)
}

/// Read an address from a single ABI-encoded word
pub fn decode_address_word(raw: &[u8]) -> ResolverResult<EthAddress> {
    if raw.len() < 32 {
        return Err(ResolverError::lookup(format!(
            "Registry returned {} bytes, expected 32",
            raw.len()
        )));
    }
    Ok(EthAddress::from_slice(&raw[12..32]))
}

fn is_missing_record(err: &ProviderError) -> bool {
    matches!(err, ProviderError::EnsError(_) | ProviderError::EnsNotOwned(_))
}

#[async_trait]
impl EnsNode for EthersNode {
    async fn resolve_domain(&self, name: &str, testnet: bool) -> Result<Option<DomainData>, ResolverError> {
        let provider = self.provider(testnet);

        let owner = self.registry_owner(provider, name).await?;
        if owner.is_zero() {
            log::debug!("{} has no owner in the registry", name);
            return Ok(None);
        }

        let resolved_address = match provider.resolve_name(name).await {
            Ok(address) => to_checksum(&address, None),
            Err(err) if is_missing_record(&err) => ZERO_ADDRESS.to_string(),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(DomainData::new(name, to_checksum(&owner, None), resolved_address)))
    }

    async fn reverse_resolve(&self, address: &str, testnet: bool) -> Result<Option<ReverseData>, ResolverError> {
        let parsed = address
            .parse::<EthAddress>()
            .map_err(|e| ResolverError::validation(format!("Invalid address {}: {}", address, e)))?;

        match self.provider(testnet).lookup_address(parsed).await {
            Ok(name) if !name.is_empty() => Ok(Some(ReverseData::new(address, name))),
            Ok(_) => Ok(None),
            Err(err) if is_missing_record(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
