//! 0x swap API client
//!
//! Three endpoints are used, all plain GETs carrying the same headers:
//! - `/swap/v1/sources` lists liquidity sources for a chain
//! - `/swap/permit2/price` returns an indicative price and allowance issues
//! - `/swap/permit2/quote` returns a firm quote with the transaction and the
//!   Permit2 typed data to sign
//!
//! The client only reads; it never signs or submits anything.

mod types;

pub use types::{
    AllowanceIssue, BalanceIssue, Bps, Fee, Fees, Fill, Issues, Permit2, PriceResponse,
    QuoteResponse, QuoteTransaction, Route, SourceList, SourcesResponse, TokenMetadata, TokenTaxes,
};

use crate::{Error, Result};
use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

pub const API_KEY_HEADER: &str = "0x-api-key";
pub const API_VERSION_HEADER: &str = "0x-version";
pub const API_VERSION: &str = "v2";

pub const SOURCES_PATH: &str = "/swap/v1/sources";
pub const PRICE_PATH: &str = "/swap/permit2/price";
pub const QUOTE_PATH: &str = "/swap/permit2/quote";

/// Query shared by the price and quote endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub chain_id: u64,
    pub sell_token: Address,
    pub buy_token: Address,
    /// Base units of the sell token
    pub sell_amount: U256,
    pub taker: Address,
    pub affiliate_fee_bps: u16,
    pub surplus_collection: bool,
}

impl SwapParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("chainId", self.chain_id.to_string()),
            ("sellToken", self.sell_token.to_string()),
            ("buyToken", self.buy_token.to_string()),
            ("sellAmount", self.sell_amount.to_string()),
            ("taker", self.taker.to_string()),
            ("affiliateFee", self.affiliate_fee_bps.to_string()),
            ("surplusCollection", self.surplus_collection.to_string()),
        ]
    }
}

/// The aggregator operations the swap flow depends on
#[async_trait]
pub trait SwapApi: Send + Sync {
    /// Liquidity sources available on a chain
    async fn sources(&self, chain_id: u64) -> Result<SourcesResponse>;

    /// Indicative price; also reports allowance issues
    async fn price(&self, params: &SwapParams) -> Result<PriceResponse>;

    /// Firm quote with transaction and Permit2 payload
    async fn quote(&self, params: &SwapParams) -> Result<QuoteResponse>;
}

/// HTTP client for the 0x API
pub struct ZeroExClient {
    client: reqwest::Client,
    base_url: String,
}

impl ZeroExClient {
    /// Create a client with the API key and version headers installed
    pub fn new(base_url: &str, api_key: &SecretString) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|e| Error::Config(format!("Invalid API key header value: {}", e)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Aggregator(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Aggregator(format!("Unexpected {} response: {}", path, e)))
    }
}

#[async_trait]
impl SwapApi for ZeroExClient {
    async fn sources(&self, chain_id: u64) -> Result<SourcesResponse> {
        self.get(SOURCES_PATH, &[("chainId", chain_id.to_string())])
            .await
    }

    async fn price(&self, params: &SwapParams) -> Result<PriceResponse> {
        self.get(PRICE_PATH, &params.to_query()).await
    }

    async fn quote(&self, params: &SwapParams) -> Result<QuoteResponse> {
        self.get(QUOTE_PATH, &params.to_query()).await
    }
}
