//! Liquidity-source listing

use crate::aggregator::SwapApi;
use crate::config::Network;
use crate::Result;

/// Fetch and print the liquidity sources 0x routes through on `network`
///
/// Purely informational; a failure here still aborts the run.
pub async fn report_sources<A: SwapApi + ?Sized>(
    api: &A,
    network: Network,
) -> Result<Vec<String>> {
    let names = api.sources(network.chain_id()).await?.names();

    tracing::debug!(
        network = network.name(),
        count = names.len(),
        "Fetched liquidity sources"
    );
    println!("Liquidity sources for {} chain:", network.name());
    println!("{}", names.join(", "));

    Ok(names)
}
