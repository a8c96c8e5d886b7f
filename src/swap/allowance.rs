//! Permit2 allowance
//!
//! The price endpoint reports `issues.allowance` when the Permit2 contract
//! cannot yet pull the sell token. In that case the spender is approved for
//! `U256::MAX`: simulate first, then send and wait for inclusion.
//!
//! A failed approval is logged and the run carries on. The swap will then
//! most likely revert on-chain.

use crate::aggregator::Issues;
use crate::wallet::ChainOps;
use alloy::primitives::{Address, B256, U256};

/// What the price response asks us to do about the allowance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowanceAction {
    Approve { spender: Address, actual: String },
    Sufficient,
}

impl AllowanceAction {
    pub fn from_issues(issues: &Issues) -> Self {
        match &issues.allowance {
            Some(issue) => AllowanceAction::Approve {
                spender: issue.spender,
                actual: issue.actual.clone(),
            },
            None => AllowanceAction::Sufficient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    NotNeeded,
    Approved { tx_hash: B256 },
    /// Dry run: the simulation passed, nothing was sent
    Simulated,
    Failed { reason: String },
}

/// Approve the Permit2 spender if the price response asked for it
pub async fn ensure_allowance<C: ChainOps + ?Sized>(
    chain: &C,
    token: Address,
    action: &AllowanceAction,
    dry_run: bool,
) -> ApprovalOutcome {
    let (spender, actual) = match action {
        AllowanceAction::Sufficient => {
            println!("Allowance already sufficient, no approval needed");
            return ApprovalOutcome::NotNeeded;
        }
        AllowanceAction::Approve { spender, actual } => (*spender, actual),
    };

    tracing::info!(
        token = %token,
        spender = %spender,
        actual = %actual,
        "Approving Permit2 to spend sell token"
    );

    if let Err(e) = chain.simulate_approve(token, spender, U256::MAX).await {
        tracing::error!(error = %e, "Approval simulation failed");
        return ApprovalOutcome::Failed {
            reason: e.to_string(),
        };
    }

    if dry_run {
        println!("Dry run: approval simulated for {}, not sent", spender);
        return ApprovalOutcome::Simulated;
    }

    match chain.send_approve(token, spender, U256::MAX).await {
        Ok(tx_hash) => {
            println!("Approved Permit2 to spend sell token: {}", tx_hash);
            ApprovalOutcome::Approved { tx_hash }
        }
        Err(e) => {
            tracing::error!(error = %e, "Approval failed, continuing");
            ApprovalOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
