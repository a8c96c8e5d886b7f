//! Final transaction: sign locally, broadcast raw
//!
//! No gas estimation and no receipt polling; the hash is printed and the
//! run ends.

use crate::aggregator::QuoteTransaction;
use crate::swap::permit::SignedQuote;
use crate::wallet::ChainOps;
use crate::Result;
use alloy::primitives::{Address, Bytes, B256};
use alloy::rpc::types::TransactionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Broadcast { tx_hash: B256 },
    /// Dry run: signed but never sent
    Signed { raw: Bytes },
}

/// Transaction request for the quote, with the spliced calldata
///
/// `gas`, `gasPrice` and `value` are copied only when the quote has them.
pub fn build_transaction(
    from: Address,
    chain_id: u64,
    quote_tx: &QuoteTransaction,
    data: Bytes,
    nonce: u64,
) -> Result<TransactionRequest> {
    let mut request = TransactionRequest::default()
        .from(from)
        .to(quote_tx.to)
        .input(data.into())
        .nonce(nonce);
    request.chain_id = Some(chain_id);

    if let Some(gas) = quote_tx.gas_limit()? {
        request.gas = Some(gas);
    }
    if let Some(gas_price) = quote_tx.gas_price_wei()? {
        request.gas_price = Some(gas_price);
    }
    if let Some(value) = quote_tx.value_wei()? {
        request.value = Some(value);
    }

    Ok(request)
}

/// Sign the swap transaction and, unless `dry_run`, broadcast it
pub async fn submit_transaction<C: ChainOps + ?Sized>(
    chain: &C,
    chain_id: u64,
    quote_tx: &QuoteTransaction,
    signed: &SignedQuote,
    dry_run: bool,
) -> Result<Submission> {
    let nonce = chain.transaction_count().await?;
    let request = build_transaction(
        chain.address(),
        chain_id,
        quote_tx,
        signed.data().clone(),
        nonce,
    )?;

    tracing::debug!(nonce, to = %quote_tx.to, "Signing swap transaction");
    let raw = chain.sign_transaction(request).await?;

    if dry_run {
        println!(
            "Dry run: signed transaction ({} bytes), not broadcast",
            raw.len()
        );
        return Ok(Submission::Signed { raw });
    }

    let tx_hash = chain.send_raw_transaction(&raw).await?;
    tracing::info!(tx_hash = %tx_hash, "Swap transaction broadcast");

    Ok(Submission::Broadcast { tx_hash })
}
