//! Token registry for the WETH -> wstETH pair
//!
//! Addresses of the wrapped native token and Lido's wrapped staked ETH on
//! every supported network. Decimals are not stored here: the sell token's
//! decimals are always read from the contract before a swap.

use alloy::primitives::{address, Address};

/// Token metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    /// Token symbol (e.g., "WETH", "wstETH")
    pub symbol: &'static str,
    /// Contract address
    pub address: Address,
}

impl TokenInfo {
    pub const fn new(symbol: &'static str, address: Address) -> Self {
        Self { symbol, address }
    }
}

/// Chain ID constants
pub mod chains {
    pub const ETHEREUM: u64 = 1;
    pub const ARBITRUM: u64 = 42161;
    pub const OPTIMISM: u64 = 10;
    pub const BASE: u64 = 8453;
    pub const SCROLL: u64 = 534352;
}

/// Well-known token addresses per chain
pub mod addresses {
    use super::*;

    // === Ethereum Mainnet ===
    pub const WETH_ETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    pub const WSTETH_ETH: Address = address!("7f39c581f595b53c5cb19bd0b3f8da6c935e2ca0");

    // === Arbitrum ===
    pub const WETH_ARB: Address = address!("82af49447d8a07e3bd95bd0d56f35241523fbab1");
    pub const WSTETH_ARB: Address = address!("5979d7b546e38e414f7e9822514be443a4800529");

    // === Optimism ===
    pub const WETH_OPT: Address = address!("4200000000000000000000000000000000000006");
    pub const WSTETH_OPT: Address = address!("1f32b1c2345538c0c6f582fcb022739c4a194ebb");

    // === Base ===
    pub const WETH_BASE: Address = address!("4200000000000000000000000000000000000006");
    pub const WSTETH_BASE: Address = address!("c1cba3fcea344f92d9239c08c0568f6f2f0ee452");

    // === Scroll ===
    pub const WETH_SCROLL: Address = address!("5300000000000000000000000000000000000004");
    pub const WSTETH_SCROLL: Address = address!("f610a9dfb7c89644979b4a0f27063e9a7d7cda32");
}

/// The two tokens involved in a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair {
    pub sell: TokenInfo,
    pub buy: TokenInfo,
}

impl SwapPair {
    /// WETH -> wstETH
    pub const fn weth_to_wsteth(weth: Address, wsteth: Address) -> Self {
        Self {
            sell: TokenInfo::new("WETH", weth),
            buy: TokenInfo::new("wstETH", wsteth),
        }
    }
}
