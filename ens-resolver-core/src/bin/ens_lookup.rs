//! Resolve one ENS name or address and print the resulting store as JSON.
//!
//! Usage: `ens_lookup <name.eth | 0xaddress> [--refresh]`

use anyhow::{bail, Context, Result};
use ens_resolver_core::{init, init_resolver_core};

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let mut args = std::env::args().skip(1);
    let Some(target) = args.next() else {
        bail!("usage: ens_lookup <name.eth | 0xaddress> [--refresh]");
    };
    let refresh = args.any(|arg| arg == "--refresh");

    let core = init_resolver_core()
        .await
        .context("Failed to start resolver core")?;

    eprintln!("Resolving {} on {}", target, core.network());
    if target.starts_with("0x") {
        core.resolve_address(&target, refresh).await?;
    } else {
        core.resolve_domain(&target, refresh).await?;
    }

    let store = core.store().clone();
    core.shutdown().await?;

    let state = store.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
