//! Typed 0x API responses
//!
//! Only the fields the swap flow reads are modelled; everything else the
//! API returns is kept in `extra` so the full response can still be printed.

use crate::{Error, Result};
use alloy::dyn_abi::TypedData;
use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Basis points; the API sends these as decimal strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Bps(pub u32);

impl Bps {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Bps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u32),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Bps(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Bps)
                .map_err(|e| serde::de::Error::custom(format!("invalid bps '{}': {}", s, e))),
        }
    }
}

impl Serialize for Bps {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

/// `GET /swap/v1/sources`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub sources: SourceList,
}

/// Sources come back either keyed by name or as a bare list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceList {
    Named(Map<String, Value>),
    Plain(Vec<String>),
}

impl SourcesResponse {
    /// Source names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = match &self.sources {
            SourceList::Named(map) => map.keys().cloned().collect(),
            SourceList::Plain(list) => list.clone(),
        };
        names.sort();
        names
    }
}

/// Problems 0x detected with the taker's current state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
    #[serde(default)]
    pub allowance: Option<AllowanceIssue>,
    #[serde(default)]
    pub balance: Option<BalanceIssue>,
    #[serde(default)]
    pub simulation_incomplete: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The Permit2 contract lacks allowance for the sell token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowanceIssue {
    /// Current allowance, base units
    pub actual: String,
    pub spender: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceIssue {
    pub token: Address,
    pub actual: String,
    pub expected: String,
}

/// Buy/sell taxes charged by fee-on-transfer tokens
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTaxes {
    #[serde(default)]
    pub buy_tax_bps: Option<Bps>,
    #[serde(default)]
    pub sell_tax_bps: Option<Bps>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(default)]
    pub buy_token: TokenTaxes,
    #[serde(default)]
    pub sell_token: TokenTaxes,
}

/// `GET /swap/permit2/price`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    #[serde(default)]
    pub liquidity_available: Option<bool>,
    #[serde(default)]
    pub buy_amount: Option<String>,
    #[serde(default)]
    pub sell_amount: Option<String>,
    #[serde(default)]
    pub issues: Issues,
    #[serde(default)]
    pub token_metadata: Option<TokenMetadata>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One leg of the route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub source: String,
    pub proportion_bps: Bps,
    #[serde(default)]
    pub from: Option<Address>,
    #[serde(default)]
    pub to: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Transaction to sign, as returned by the quote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTransaction {
    pub to: Address,
    #[serde(default)]
    pub data: Option<Bytes>,
    #[serde(default)]
    pub gas: Option<String>,
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl QuoteTransaction {
    /// Gas limit, if the API supplied one
    pub fn gas_limit(&self) -> Result<Option<u64>> {
        self.gas
            .as_deref()
            .map(|gas| {
                let gas = parse_quantity("gas", gas)?;
                u64::try_from(gas)
                    .map_err(|_| Error::Aggregator(format!("gas out of range: {}", gas)))
            })
            .transpose()
    }

    /// Legacy gas price in wei
    pub fn gas_price_wei(&self) -> Result<Option<u128>> {
        self.gas_price
            .as_deref()
            .map(|price| {
                let price = parse_quantity("gasPrice", price)?;
                u128::try_from(price)
                    .map_err(|_| Error::Aggregator(format!("gasPrice out of range: {}", price)))
            })
            .transpose()
    }

    /// Native value attached to the call
    pub fn value_wei(&self) -> Result<Option<U256>> {
        self.value
            .as_deref()
            .map(|value| parse_quantity("value", value))
            .transpose()
    }
}

/// Decimal or 0x-hex quantity
fn parse_quantity(field: &str, raw: &str) -> Result<U256> {
    U256::from_str(raw.trim())
        .map_err(|e| Error::Aggregator(format!("Invalid {} '{}': {}", field, raw, e)))
}

/// Permit2 signing material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permit2 {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub hash: Option<B256>,
    #[serde(default)]
    pub eip712: Option<TypedData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub amount: String,
    pub token: Address,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    #[serde(default)]
    pub integrator_fee: Option<Fee>,
    #[serde(default)]
    pub zero_ex_fee: Option<Fee>,
    #[serde(default)]
    pub gas_fee: Option<Fee>,
}

/// `GET /swap/permit2/quote`: the price fields plus everything needed to
/// execute
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(default)]
    pub liquidity_available: Option<bool>,
    #[serde(default)]
    pub buy_amount: Option<String>,
    #[serde(default)]
    pub sell_amount: Option<String>,
    #[serde(default)]
    pub issues: Issues,
    #[serde(default)]
    pub token_metadata: Option<TokenMetadata>,
    #[serde(default)]
    pub route: Option<Route>,
    /// Absent when no liquidity was found
    #[serde(default)]
    pub transaction: Option<QuoteTransaction>,
    #[serde(default)]
    pub permit2: Option<Permit2>,
    #[serde(default)]
    pub fees: Option<Fees>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteResponse {
    /// Typed-data payload to sign, if the quote needs one
    pub fn permit_payload(&self) -> Option<&TypedData> {
        self.permit2.as_ref().and_then(|p| p.eip712.as_ref())
    }

    /// Transaction to sign, unless the API found no liquidity
    pub fn executable(&self) -> Option<&QuoteTransaction> {
        match self.liquidity_available {
            Some(false) => None,
            _ => self.transaction.as_ref(),
        }
    }
}
