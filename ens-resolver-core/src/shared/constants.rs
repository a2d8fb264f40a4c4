//! Constants for the resolver core
//!
//! This module contains all constants used throughout the resolver core.

use std::time::Duration;

// Resolution constants
pub const RESOLUTION_TIMEOUT_MS: u64 = 10_000;
pub const RESOLUTION_TIMEOUT: Duration = Duration::from_millis(RESOLUTION_TIMEOUT_MS);

// Notification constants
pub const DEFAULT_NOTIFICATION_MS: u64 = 5_000;
pub const DOMAIN_FAILURE_MESSAGE: &str = "Could not resolve ENS name";
pub const ADDRESS_FAILURE_MESSAGE: &str = "Could not resolve address";

// ENS constants
pub const ENS_REGISTRY_ADDRESS: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";
pub const ENS_MIN_LABEL_LENGTH: usize = 1;
pub const ENS_MAX_NAME_LENGTH: usize = 255;
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Event bus
pub const EVENT_BUS_CAPACITY: usize = 64;

// Configuration keys
pub const ENV_NETWORK: &str = "ENS_CORE_NETWORK";
pub const ENV_RPC_MAINNET: &str = "ENS_CORE_RPC_MAINNET";
pub const ENV_RPC_SEPOLIA: &str = "ENS_CORE_RPC_SEPOLIA";
pub const ENV_NOTIFICATION_MS: &str = "ENS_CORE_NOTIFICATION_MS";

// Public RPC defaults
pub const DEFAULT_RPC_MAINNET: &str = "https://eth.llamarpc.com";
pub const DEFAULT_RPC_SEPOLIA: &str = "https://rpc.sepolia.org";
