//! Swap query construction and the indicative price
//!
//! The same [`SwapParams`] drive both the price and the quote request, so
//! they are built once from the settings and the sell token's on-chain
//! decimals.

use crate::aggregator::{PriceResponse, SwapApi, SwapParams};
use crate::config::SwapSettings;
use crate::swap::display::{print_json, print_lines, tax_lines};
use crate::wallet::ChainOps;
use crate::{Error, Result};
use alloy::primitives::utils::{parse_units, ParseUnits};
use alloy::primitives::U256;

/// Convert a human amount ("0.1") to base units of a token with `decimals`
pub fn parse_sell_amount(amount: &str, decimals: u8) -> Result<U256> {
    let parsed = parse_units(amount.trim(), decimals)
        .map_err(|e| Error::InvalidArgument(format!("Invalid sell amount '{}': {}", amount, e)))?;

    match parsed {
        ParseUnits::U256(value) if !value.is_zero() => Ok(value),
        _ => Err(Error::InvalidArgument(format!(
            "Sell amount must be positive, got '{}'",
            amount
        ))),
    }
}

/// Build the shared price/quote query for the configured pair
pub async fn swap_params<C: ChainOps + ?Sized>(
    chain: &C,
    settings: &SwapSettings,
) -> Result<SwapParams> {
    let pair = settings.network.swap_pair();
    let decimals = chain.token_decimals(pair.sell.address).await?;
    let sell_amount = parse_sell_amount(&settings.sell_amount, decimals)?;

    tracing::debug!(
        sell = pair.sell.symbol,
        buy = pair.buy.symbol,
        decimals,
        sell_amount = %sell_amount,
        "Built swap parameters"
    );

    Ok(SwapParams {
        chain_id: settings.network.chain_id(),
        sell_token: pair.sell.address,
        buy_token: pair.buy.address,
        sell_amount,
        taker: chain.address(),
        affiliate_fee_bps: settings.affiliate_fee_bps,
        surplus_collection: settings.surplus_collection,
    })
}

/// Fetch and print the indicative price
pub async fn fetch_price<A: SwapApi + ?Sized>(
    api: &A,
    params: &SwapParams,
) -> Result<PriceResponse> {
    let price = api.price(params).await?;
    if price.liquidity_available == Some(false) {
        tracing::warn!("0x reports no liquidity for this pair");
    }

    print_json("Price", &price)?;
    if let Some(metadata) = &price.token_metadata {
        print_lines(&tax_lines(metadata));
    }

    Ok(price)
}
