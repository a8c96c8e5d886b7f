pub mod fixtures;

use alloy::dyn_abi::TypedData;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use permit2_swap::{ChainOps, Result, SecureWallet};
use std::sync::{Mutex, Once};

static LOG_INIT: Once = Once::new();

pub fn setup_log() {
    LOG_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

pub const TX_HASH: B256 = B256::repeat_byte(0x42);

/// Chain handle that signs for real but records writes instead of sending
///
/// The unit-test `MockChain` lives behind `cfg(test)` in the library and is
/// not visible from integration tests, hence this smaller double.
pub struct RecordingChain {
    wallet: SecureWallet,
    pub approvals_simulated: Mutex<Vec<(Address, Address, U256)>>,
    pub approvals_sent: Mutex<Vec<(Address, Address, U256)>>,
    pub broadcasts: Mutex<Vec<Bytes>>,
}

impl RecordingChain {
    pub fn new() -> Self {
        Self {
            wallet: SecureWallet::from_hex(fixtures::TEST_KEY).unwrap(),
            approvals_simulated: Mutex::new(Vec::new()),
            approvals_sent: Mutex::new(Vec::new()),
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    pub fn broadcasts(&self) -> Vec<Bytes> {
        self.broadcasts.lock().unwrap().clone()
    }
}

impl Default for RecordingChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainOps for RecordingChain {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    async fn token_decimals(&self, _token: Address) -> Result<u8> {
        Ok(18)
    }

    async fn simulate_approve(&self, token: Address, spender: Address, amount: U256) -> Result<()> {
        self.approvals_simulated
            .lock()
            .unwrap()
            .push((token, spender, amount));
        Ok(())
    }

    async fn send_approve(&self, token: Address, spender: Address, amount: U256) -> Result<B256> {
        self.approvals_sent
            .lock()
            .unwrap()
            .push((token, spender, amount));
        Ok(B256::repeat_byte(0x01))
    }

    async fn sign_typed_data(&self, payload: &TypedData) -> Result<Signature> {
        self.wallet.sign_typed_data(payload)
    }

    async fn transaction_count(&self) -> Result<u64> {
        Ok(0)
    }

    async fn sign_transaction(&self, request: TransactionRequest) -> Result<Bytes> {
        self.wallet.sign_transaction(request).await
    }

    async fn send_raw_transaction(&self, raw: &Bytes) -> Result<B256> {
        self.broadcasts.lock().unwrap().push(raw.clone());
        Ok(TX_HASH)
    }
}
