//! Resolution result records
//!
//! Payloads produced by a successful forward or reverse lookup.

use serde::{Deserialize, Serialize};
use crate::shared::types::{Address, DomainName, Hash32};
use crate::shared::utils::{labelhash, namehash, to_hex32};

/// Forward resolution result for a domain name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainData {
    pub name: DomainName,
    pub label_hash: Hash32,
    pub name_hash: Hash32,
    pub owner_address: Address,
    pub resolved_address: Address,
}

impl DomainData {
    /// Build a record, deriving both hashes from `name`
    pub fn new(name: impl Into<DomainName>, owner_address: Address, resolved_address: Address) -> Self {
        let name = name.into();
        let first_label = name.split('.').next().unwrap_or_default();
        Self {
            label_hash: to_hex32(&labelhash(first_label)),
            name_hash: to_hex32(&namehash(&name)),
            name,
            owner_address,
            resolved_address,
        }
    }
}

/// Reverse resolution result for an address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReverseData {
    pub address: Address,
    pub name: DomainName,
}

impl ReverseData {
    pub fn new(address: impl Into<Address>, name: impl Into<DomainName>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}
