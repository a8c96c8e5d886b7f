//! Wallet and chain access
//!
//! The private key lives in [`SecureWallet`] and never leaves it. Everything
//! the swap flow needs from the chain goes through [`ChainOps`], so the flow
//! can run against a recording double in tests.

mod chain;
mod signer;
pub mod simulator;

pub use chain::{ChainClient, HttpProvider};
pub use signer::SecureWallet;

use crate::Result;
use alloy::dyn_abi::TypedData;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

#[async_trait]
pub trait ChainOps: Send + Sync {
    /// Taker address
    fn address(&self) -> Address;

    /// ERC-20 `decimals()`
    async fn token_decimals(&self, token: Address) -> Result<u8>;

    /// Dry-run `approve(spender, amount)` from the taker via `eth_call`
    async fn simulate_approve(&self, token: Address, spender: Address, amount: U256) -> Result<()>;

    /// Send `approve(spender, amount)` and wait for a successful receipt
    async fn send_approve(&self, token: Address, spender: Address, amount: U256) -> Result<B256>;

    async fn sign_typed_data(&self, payload: &TypedData) -> Result<Signature>;

    /// Pending nonce of the taker
    async fn transaction_count(&self) -> Result<u64>;

    /// Sign a complete request into raw EIP-2718 bytes
    async fn sign_transaction(&self, request: TransactionRequest) -> Result<Bytes>;

    async fn send_raw_transaction(&self, raw: &Bytes) -> Result<B256>;
}
