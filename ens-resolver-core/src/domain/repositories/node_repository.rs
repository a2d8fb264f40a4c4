//! Node repository for ENS lookups
//!
//! The resolution workers only see this trait; connection handling and
//! retries belong to the implementation.

use async_trait::async_trait;
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::shared::error::ResolverError;

/// ENS node trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnsNode: Send + Sync {
    /// Resolve a domain name to its ownership and address records.
    /// `Ok(None)` means the node answered but had nothing for the name.
    async fn resolve_domain(&self, name: &str, testnet: bool) -> Result<Option<DomainData>, ResolverError>;

    /// Reverse-resolve an address to its primary name
    async fn reverse_resolve(&self, address: &str, testnet: bool) -> Result<Option<ReverseData>, ResolverError>;
}
