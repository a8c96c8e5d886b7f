//! Chain client: one signing account bound to one chain and one HTTP transport.

use super::simulator::revert_reason;
use super::{ChainOps, SecureWallet};
use crate::contracts::IERC20;
use crate::{Error, Result};
use alloy::dyn_abi::TypedData;
use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Identity, Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use url::Url;

/// The concrete provider type produced by `ProviderBuilder::new().wallet(...).connect_http(...)`.
pub type HttpProvider = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Ethereum>,
    Ethereum,
>;

pub struct ChainClient {
    provider: HttpProvider,
    wallet: SecureWallet,
    chain_id: u64,
}

impl ChainClient {
    pub fn new(rpc_url: Url, wallet: SecureWallet, chain_id: u64) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(wallet.wallet().clone())
            .connect_http(rpc_url);

        Self {
            provider,
            wallet,
            chain_id,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

#[async_trait]
impl ChainOps for ChainClient {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        IERC20::new(token, &self.provider)
            .decimals()
            .call()
            .await
            .map_err(|e| Error::Rpc(format!("decimals() on {} failed: {}", token, e)))
    }

    async fn simulate_approve(&self, token: Address, spender: Address, amount: U256) -> Result<()> {
        let approved = IERC20::new(token, &self.provider)
            .approve(spender, amount)
            .from(self.address())
            .call()
            .await
            .map_err(|e| Error::Simulation(revert_reason(&e.to_string())))?;

        if !approved {
            return Err(Error::Simulation("approve returned false".to_string()));
        }
        Ok(())
    }

    async fn send_approve(&self, token: Address, spender: Address, amount: U256) -> Result<B256> {
        let pending = IERC20::new(token, &self.provider)
            .approve(spender, amount)
            .from(self.address())
            .send()
            .await
            .map_err(|e| Error::Approval(revert_reason(&e.to_string())))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, "Approval sent, waiting for inclusion");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| Error::Approval(format!("Receipt fetch failed: {}", e)))?;

        if !receipt.status() {
            return Err(Error::Approval(format!("{} reverted", tx_hash)));
        }

        tracing::debug!(
            tx_hash = %tx_hash,
            block = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Approval confirmed"
        );
        Ok(tx_hash)
    }

    async fn sign_typed_data(&self, payload: &TypedData) -> Result<Signature> {
        self.wallet.sign_typed_data(payload)
    }

    async fn transaction_count(&self) -> Result<u64> {
        self.provider
            .get_transaction_count(self.address())
            .pending()
            .await
            .map_err(|e| Error::Rpc(format!("Failed to get nonce: {}", e)))
    }

    async fn sign_transaction(&self, request: TransactionRequest) -> Result<Bytes> {
        self.wallet.sign_transaction(request).await
    }

    async fn send_raw_transaction(&self, raw: &Bytes) -> Result<B256> {
        let pending = self
            .provider
            .send_raw_transaction(raw)
            .await
            .map_err(|e| Error::Rpc(format!("Broadcast failed: {}", e)))?;
        Ok(*pending.tx_hash())
    }
}
