//! Utility functions for the resolver core
//!
//! This module contains ENS hashing and input validation helpers.

use crate::shared::constants::{ENS_MAX_NAME_LENGTH, ENS_MIN_LABEL_LENGTH};
use crate::shared::error::ResolverError;
use sha3::{Digest, Keccak256};

/// Keccak-256 of arbitrary bytes
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Normalize an ENS name for lookup (trimmed, lowercased)
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}

/// Normalize an address for use as a lookup key (trimmed, lowercased)
pub fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Hash of a single label
pub fn labelhash(label: &str) -> [u8; 32] {
    keccak256(label.as_bytes())
}

/// EIP-137 namehash of a full name
pub fn namehash(name: &str) -> [u8; 32] {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&node);
        buf[32..].copy_from_slice(&labelhash(label));
        node = keccak256(&buf);
    }
    node
}

/// Hex-encode a 32-byte hash with 0x prefix
pub fn to_hex32(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Validate an ENS name
pub fn validate_ens_name(name: &str) -> Result<(), ResolverError> {
    if name.is_empty() {
        return Err(ResolverError::validation("ENS name cannot be empty"));
    }

    if name.len() > ENS_MAX_NAME_LENGTH {
        return Err(ResolverError::validation(format!(
            "ENS name must be at most {} characters long",
            ENS_MAX_NAME_LENGTH
        )));
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err(ResolverError::validation(format!(
            "ENS name must include a top-level domain: {}",
            name
        )));
    }

    for label in labels {
        if label.chars().count() < ENS_MIN_LABEL_LENGTH {
            return Err(ResolverError::validation(format!("ENS name has an empty label: {}", name)));
        }
        // Non-ASCII labels pass through; full UTS-46 mapping is the node's job
        if let Some(c) = label
            .chars()
            .find(|c| c.is_ascii() && !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ResolverError::validation(format!(
                "ENS name contains invalid character '{}': {}",
                c, name
            )));
        }
    }

    Ok(())
}

/// Validate Ethereum address format
pub fn validate_ethereum_address(address: &str) -> Result<(), ResolverError> {
    if !address.starts_with("0x") {
        return Err(ResolverError::validation("Address must start with 0x"));
    }

    if address.len() != 42 {
        return Err(ResolverError::validation("Address must be 42 characters long"));
    }

    // Check if all characters after 0x are valid hex
    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ResolverError::validation("Address contains invalid hex characters"));
    }

    Ok(())
}
