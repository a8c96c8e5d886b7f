//! Swap runner
//!
//! Drives one swap end to end over injected aggregator and chain handles:
//! sources, price, allowance, quote, permit signature, submission.

use crate::aggregator::{PriceResponse, QuoteResponse, SwapApi, SwapParams};
use crate::config::SwapSettings;
use crate::swap::display::{
    fee_lines, print_json, print_lines, route_lines, surplus_line, tax_lines, total_bps,
};
use crate::swap::{
    ensure_allowance, fetch_price, report_sources, sign_quote, submit_transaction, swap_params,
    AllowanceAction, Submission,
};
use crate::wallet::ChainOps;
use crate::Result;
use alloy::primitives::B256;
use tracing::{debug, error, info};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Transaction broadcast; inclusion is not awaited
    Submitted { tx_hash: B256, explorer_url: String },
    /// Dry run: the transaction was signed but not sent
    Signed { raw_len: usize },
    /// The quote carried no Permit2 payload, so nothing was submitted
    PermitNotRequired,
    /// 0x found no liquidity and returned no transaction
    NoLiquidity,
}

/// Runner that owns the swap pipeline
pub struct SwapRunner<A, C> {
    api: A,
    chain: C,
    settings: SwapSettings,
    dry_run: bool,
}

impl<A: SwapApi, C: ChainOps> SwapRunner<A, C> {
    pub fn new(api: A, chain: C, settings: SwapSettings) -> Self {
        Self {
            api,
            chain,
            settings,
            dry_run: false,
        }
    }

    /// Simulate the approval and sign the swap, but send nothing
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn settings(&self) -> &SwapSettings {
        &self.settings
    }

    /// Run every step in order
    pub async fn run(&self) -> Result<SwapOutcome> {
        let network = self.settings.network;
        info!(
            network = network.name(),
            taker = %self.chain.address(),
            sell_amount = %self.settings.sell_amount,
            dry_run = self.dry_run,
            "Starting Permit2 swap"
        );

        report_sources(&self.api, network).await?;

        let params = swap_params(&self.chain, &self.settings).await?;
        let price = fetch_price(&self.api, &params).await?;

        let action = AllowanceAction::from_issues(&price.issues);
        let approval =
            ensure_allowance(&self.chain, params.sell_token, &action, self.dry_run).await;
        debug!(?approval, "Allowance step finished");

        let quote = self.fetch_quote(&params).await?;
        let Some(quote_tx) = quote.executable() else {
            error!(zid = ?quote.extra.get("zid"), "Quote has no transaction");
            println!("No liquidity available, no transaction to submit");
            return Ok(SwapOutcome::NoLiquidity);
        };

        let signed = match sign_quote(&self.chain, &quote).await? {
            Some(signed) => signed,
            None => return Ok(SwapOutcome::PermitNotRequired),
        };

        let submission = submit_transaction(
            &self.chain,
            params.chain_id,
            quote_tx,
            &signed,
            self.dry_run,
        )
        .await?;

        Ok(match submission {
            Submission::Broadcast { tx_hash } => {
                let explorer_url = network.tx_url(&tx_hash.to_string());
                println!("Transaction hash: {}", tx_hash);
                println!("See tx details at {}", explorer_url);
                SwapOutcome::Submitted {
                    tx_hash,
                    explorer_url,
                }
            }
            Submission::Signed { raw } => {
                let raw_len = raw.len();
                SwapOutcome::Signed { raw_len }
            }
        })
    }

    /// Sources and price only; nothing is approved, signed or sent
    pub async fn price_only(&self) -> Result<PriceResponse> {
        report_sources(&self.api, self.settings.network).await?;
        let params = swap_params(&self.chain, &self.settings).await?;
        let price = fetch_price(&self.api, &params).await?;

        if let Some(issue) = &price.issues.allowance {
            println!(
                "Approval required: spender {} has allowance {}",
                issue.spender, issue.actual
            );
        }
        Ok(price)
    }

    /// Fetch the firm quote and print its route, taxes and fees
    async fn fetch_quote(&self, params: &SwapParams) -> Result<QuoteResponse> {
        let quote = self.api.quote(params).await?;
        print_json("Quote", &quote)?;

        if let Some(route) = &quote.route {
            debug!(total_bps = total_bps(route), "Route proportions");
            print_lines(&route_lines(route));
        }
        if let Some(metadata) = &quote.token_metadata {
            print_lines(&tax_lines(metadata));
        }
        if let Some(fees) = &quote.fees {
            print_lines(&fee_lines(fees));
        }
        println!("{}", surplus_line(self.settings.surplus_collection));

        Ok(quote)
    }
}
