//! Resolver configuration
//!
//! Loaded from `.env` and the process environment. The resolution timeout is
//! fixed and not configurable.

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use crate::shared::constants::{
    DEFAULT_NOTIFICATION_MS, DEFAULT_RPC_MAINNET, DEFAULT_RPC_SEPOLIA, ENV_NETWORK, ENV_NOTIFICATION_MS,
    ENV_RPC_MAINNET, ENV_RPC_SEPOLIA,
};
use crate::shared::error::ResolverError;
use crate::shared::types::{Network, ResolverResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    pub network: Network,
    pub mainnet_rpc_url: String,
    pub sepolia_rpc_url: String,
    pub notification_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            mainnet_rpc_url: DEFAULT_RPC_MAINNET.to_string(),
            sepolia_rpc_url: DEFAULT_RPC_SEPOLIA.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from .env or safe defaults
    pub fn from_env() -> ResolverResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ResolverResult<Self> {
        let defaults = Self::default();

        let network = match lookup(ENV_NETWORK) {
            Some(value) => value.parse()?,
            None => defaults.network,
        };

        let notification_ms = match lookup(ENV_NOTIFICATION_MS) {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                ResolverError::config(format!("Invalid {}: {} ({})", ENV_NOTIFICATION_MS, value, e))
            })?,
            None => defaults.notification_ms,
        };

        let config = Self {
            network,
            mainnet_rpc_url: lookup(ENV_RPC_MAINNET).unwrap_or(defaults.mainnet_rpc_url),
            sepolia_rpc_url: lookup(ENV_RPC_SEPOLIA).unwrap_or(defaults.sepolia_rpc_url),
            notification_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ResolverResult<()> {
        if self.rpc_url(self.network).trim().is_empty() {
            return Err(ResolverError::config(format!("RPC URL not set for {}", self.network)));
        }
        for url in [&self.mainnet_rpc_url, &self.sepolia_rpc_url] {
            if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ResolverError::config(format!("RPC URL must be http(s): {}", url)));
            }
        }
        if self.notification_ms == 0 {
            return Err(ResolverError::config("Notification duration must be positive"));
        }
        Ok(())
    }

    pub fn rpc_url(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_rpc_url,
            Network::Sepolia => &self.sepolia_rpc_url,
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}
