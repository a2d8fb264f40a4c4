use ens_resolver_core::{Network, ResolverConfig};

fn main() {
    let config = match ResolverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("ENS Resolver Core Network Configuration:\n");
    println!("  Network: {} (chain id {})", config.network, config.network.chain_id());
    println!("  Mainnet RPC URL: {}", config.rpc_url(Network::Mainnet));
    println!("  Sepolia RPC URL: {}", config.rpc_url(Network::Sepolia));
    println!("  Selected RPC URL: {}", config.rpc_url(config.network));
    println!("  Block explorer: {}", config.network.block_explorer());
    println!("  Notification duration: {} ms", config.notification_ms);
}
