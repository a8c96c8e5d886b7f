//! Test doubles shared by the unit tests

use crate::aggregator::{PriceResponse, QuoteResponse, SourcesResponse, SwapApi, SwapParams};
use crate::wallet::{ChainOps, SecureWallet};
use crate::{Error, Result};
use alloy::dyn_abi::TypedData;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::Mutex;

// Hardhat account #0 (DO NOT use in production!)
pub const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const BROADCAST_HASH: B256 = B256::repeat_byte(0xaa);
pub const APPROVAL_HASH: B256 = B256::repeat_byte(0xbb);

/// Permit2 `PermitTransferFrom` payload as the quote endpoint returns it
pub fn permit_json() -> serde_json::Value {
    serde_json::json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" }
            ],
            "PermitTransferFrom": [
                { "name": "permitted", "type": "TokenPermissions" },
                { "name": "spender", "type": "address" },
                { "name": "nonce", "type": "uint256" },
                { "name": "deadline", "type": "uint256" }
            ],
            "TokenPermissions": [
                { "name": "token", "type": "address" },
                { "name": "amount", "type": "uint256" }
            ]
        },
        "domain": {
            "name": "Permit2",
            "chainId": 534352,
            "verifyingContract": "0x000000000022d473030f116ddee9f6b43ac78ba3"
        },
        "primaryType": "PermitTransferFrom",
        "message": {
            "permitted": {
                "token": "0x5300000000000000000000000000000000000004",
                "amount": "100000000000000000"
            },
            "spender": "0x0000000000001ff3684f28c67538d4d072c22734",
            "nonce": "2241959297937691820908574931991575",
            "deadline": "1718669420"
        }
    })
}

pub fn permit_payload() -> TypedData {
    serde_json::from_value(permit_json()).unwrap()
}

/// Quote with a two-leg route, the permit payload and `data = 0xabc123`
pub fn quote_json() -> serde_json::Value {
    serde_json::json!({
        "liquidityAvailable": true,
        "buyAmount": "84000000000000000",
        "sellAmount": "100000000000000000",
        "issues": { "allowance": null },
        "route": {
            "fills": [
                { "source": "Uniswap_V3", "proportionBps": "7000" },
                { "source": "Curve", "proportionBps": "3000" }
            ]
        },
        "transaction": {
            "to": "0x0000000000001ff3684f28c67538d4d072c22734",
            "data": "0xabc123",
            "gas": "288079",
            "gasPrice": "4837860000",
            "value": "0"
        },
        "permit2": {
            "type": "Permit2",
            "eip712": permit_json()
        }
    })
}

pub fn quote() -> QuoteResponse {
    serde_json::from_value(quote_json()).unwrap()
}

/// Everything the pipeline asked of the chain, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ChainCall {
    Decimals(Address),
    SimulateApprove {
        token: Address,
        spender: Address,
        amount: U256,
    },
    SendApprove {
        token: Address,
        spender: Address,
        amount: U256,
    },
    SignTypedData,
    TransactionCount,
    SignTransaction(TransactionRequest),
    SendRaw(Bytes),
}

/// Chain double that signs with a real key and records every call
pub struct MockChain {
    wallet: SecureWallet,
    pub decimals: u8,
    pub nonce: u64,
    pub fail_simulation: Option<String>,
    pub fail_approval: Option<String>,
    pub fail_signing: bool,
    calls: Mutex<Vec<ChainCall>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            wallet: SecureWallet::from_hex(TEST_KEY).unwrap(),
            decimals: 18,
            nonce: 7,
            fail_simulation: None,
            fail_approval: None,
            fail_signing: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ChainCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&ChainCall) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    pub fn broadcasts(&self) -> Vec<Bytes> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ChainCall::SendRaw(raw) => Some(raw),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ChainCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainOps for MockChain {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.record(ChainCall::Decimals(token));
        Ok(self.decimals)
    }

    async fn simulate_approve(&self, token: Address, spender: Address, amount: U256) -> Result<()> {
        self.record(ChainCall::SimulateApprove {
            token,
            spender,
            amount,
        });
        match &self.fail_simulation {
            Some(reason) => Err(Error::Simulation(reason.clone())),
            None => Ok(()),
        }
    }

    async fn send_approve(&self, token: Address, spender: Address, amount: U256) -> Result<B256> {
        self.record(ChainCall::SendApprove {
            token,
            spender,
            amount,
        });
        match &self.fail_approval {
            Some(reason) => Err(Error::Approval(reason.clone())),
            None => Ok(APPROVAL_HASH),
        }
    }

    async fn sign_typed_data(&self, payload: &TypedData) -> Result<Signature> {
        self.record(ChainCall::SignTypedData);
        if self.fail_signing {
            return Err(Error::Wallet("signer unavailable".to_string()));
        }
        self.wallet.sign_typed_data(payload)
    }

    async fn transaction_count(&self) -> Result<u64> {
        self.record(ChainCall::TransactionCount);
        Ok(self.nonce)
    }

    async fn sign_transaction(&self, request: TransactionRequest) -> Result<Bytes> {
        self.record(ChainCall::SignTransaction(request.clone()));
        self.wallet.sign_transaction(request).await
    }

    async fn send_raw_transaction(&self, raw: &Bytes) -> Result<B256> {
        self.record(ChainCall::SendRaw(raw.clone()));
        Ok(BROADCAST_HASH)
    }
}

/// Aggregator double serving canned responses
pub struct MockApi {
    pub sources: serde_json::Value,
    pub price: serde_json::Value,
    pub quote: serde_json::Value,
    requests: Mutex<Vec<(&'static str, Option<SwapParams>)>>,
}

impl MockApi {
    pub fn new(price: serde_json::Value, quote: serde_json::Value) -> Self {
        Self {
            sources: serde_json::json!({ "sources": { "Uniswap_V3": {}, "Curve": {} } }),
            price,
            quote,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Endpoint names in call order
    pub fn endpoints(&self) -> Vec<&'static str> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(e, _)| *e)
            .collect()
    }

    pub fn last_params(&self) -> Option<SwapParams> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl SwapApi for MockApi {
    async fn sources(&self, _chain_id: u64) -> Result<SourcesResponse> {
        self.requests.lock().unwrap().push(("sources", None));
        Ok(serde_json::from_value(self.sources.clone())?)
    }

    async fn price(&self, params: &SwapParams) -> Result<PriceResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(("price", Some(params.clone())));
        Ok(serde_json::from_value(self.price.clone())?)
    }

    async fn quote(&self, params: &SwapParams) -> Result<QuoteResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(("quote", Some(params.clone())));
        Ok(serde_json::from_value(self.quote.clone())?)
    }
}
