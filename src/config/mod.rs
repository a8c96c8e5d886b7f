//! Configuration for the Permit2 swap

pub mod env;

use crate::tokens::{chains, SwapPair};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

// Re-export environment variable names
pub use env::{API_KEY_ENV, PRIVATE_KEY_ENV, RPC_URL_ENV};

/// Default 0x API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.0x.org";

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Arbitrum,
    Optimism,
    Base,
    #[default]
    Scroll,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Ethereum => chains::ETHEREUM,
            Network::Arbitrum => chains::ARBITRUM,
            Network::Optimism => chains::OPTIMISM,
            Network::Base => chains::BASE,
            Network::Scroll => chains::SCROLL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
            Network::Base => "base",
            Network::Scroll => "scroll",
        }
    }

    /// Block explorer root, without trailing slash
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::Ethereum => "https://etherscan.io",
            Network::Arbitrum => "https://arbiscan.io",
            Network::Optimism => "https://optimistic.etherscan.io",
            Network::Base => "https://basescan.org",
            Network::Scroll => "https://scrollscan.com",
        }
    }

    /// Explorer link for a transaction hash
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url(), tx_hash)
    }

    /// WETH -> wstETH on this network
    pub fn swap_pair(&self) -> SwapPair {
        use crate::tokens::addresses::*;

        let (weth, wsteth) = match self {
            Network::Ethereum => (WETH_ETH, WSTETH_ETH),
            Network::Arbitrum => (WETH_ARB, WSTETH_ARB),
            Network::Optimism => (WETH_OPT, WSTETH_OPT),
            Network::Base => (WETH_BASE, WSTETH_BASE),
            Network::Scroll => (WETH_SCROLL, WSTETH_SCROLL),
        };
        SwapPair::weth_to_wsteth(weth, wsteth)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethereum" | "mainnet" => Ok(Network::Ethereum),
            "arbitrum" => Ok(Network::Arbitrum),
            "optimism" => Ok(Network::Optimism),
            "base" => Ok(Network::Base),
            "scroll" => Ok(Network::Scroll),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Parameters of the swap itself (non-secret, safe to print)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapSettings {
    /// Network to trade on
    pub network: Network,
    /// Sell amount in whole sell-token units (e.g., "0.1")
    pub sell_amount: String,
    /// Affiliate fee in basis points (100 = 1%)
    pub affiliate_fee_bps: u16,
    /// Ask 0x to collect positive trade surplus
    pub surplus_collection: bool,
    /// 0x API base URL
    pub api_base_url: String,
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            network: Network::Scroll,
            sell_amount: "0.1".to_string(),
            affiliate_fee_bps: 100,
            surplus_collection: true,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Main configuration
///
/// Secrets are held in `SecretString` and only exposed at the point of use
/// (request headers and signer construction).
#[derive(Debug)]
pub struct Config {
    /// Hex-encoded private key, always `0x`-prefixed
    pub signing_key: SecretString,
    /// 0x API key
    pub api_key: SecretString,
    /// HTTP RPC endpoint
    pub rpc_url: Url,
    /// Swap settings
    pub swap: SwapSettings,
}
