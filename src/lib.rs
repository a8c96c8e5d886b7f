//! Permit2 swap through the 0x API
//!
//! Swaps WETH for wstETH in one sequential run:
//! - List the liquidity sources 0x routes through
//! - Fetch an indicative price and approve Permit2 if the price asks for it
//! - Fetch a firm quote and sign its Permit2 EIP-712 payload
//! - Splice the signature into the calldata, sign and broadcast
//!
//! # Security Model
//!
//! - The private key is held only by `wallet::SecureWallet`
//! - Secrets are `SecretString`s and never logged or serialized
//! - Nothing is broadcast unless both a permit signature and calldata exist

pub mod aggregator;
pub mod config;
pub mod contracts;
pub mod runner;
pub mod swap;
pub mod tokens;
pub mod wallet;

mod error;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use aggregator::{SwapApi, SwapParams, ZeroExClient};
pub use config::{Config, Network, SwapSettings};
pub use error::{Error, Result};
pub use runner::{SwapOutcome, SwapRunner};
pub use wallet::{ChainClient, ChainOps, SecureWallet};
