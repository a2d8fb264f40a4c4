use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::ResolverError;

// Basic types for resolution
pub type Address = String;
pub type DomainName = String;
pub type Hash32 = String;

// Networks with a deployed ENS registry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Sepolia,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11155111,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum Mainnet",
            Network::Sepolia => "Sepolia",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Sepolia)
    }

    pub fn block_explorer(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://etherscan.io",
            Network::Sepolia => "https://sepolia.etherscan.io",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "ethereum" | "1" => Ok(Network::Mainnet),
            "sepolia" | "testnet" | "11155111" => Ok(Network::Sepolia),
            other => Err(ResolverError::config(format!("Unsupported network: {}", other))),
        }
    }
}

// Notification types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

// Result types for better error handling
pub type ResolverResult<T> = Result<T, ResolverError>;
