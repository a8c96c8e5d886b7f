//! Secure wallet implementation
//!
//! SECURITY: This is the ONLY place where the private key exists.
//! - Held in alloy's PrivateKeySigner
//! - Never serialized, never logged
//! - Exposed only through signing operations

use crate::{Error, Result};
use alloy::dyn_abi::TypedData;
use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, Signature, B256};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use secrecy::{ExposeSecret, SecretString};

/// Secure wallet that protects the private key
pub struct SecureWallet {
    /// The signer
    signer: PrivateKeySigner,
    /// Public address (safe to expose)
    address: Address,
    /// Ethereum wallet for alloy transaction building
    wallet: EthereumWallet,
}

impl SecureWallet {
    /// Create a wallet from a secret hex key
    pub fn from_secret(key: &SecretString) -> Result<Self> {
        Self::from_hex(key.expose_secret())
    }

    /// Create a wallet from a hex-encoded private key
    pub fn from_hex(key_hex: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Error::Wallet(format!("Invalid private key: {}", e)))?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer.clone());

        Ok(Self {
            signer,
            address,
            wallet,
        })
    }

    /// Get the public address (safe to share)
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get a reference to the EthereumWallet for use with alloy providers
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }

    /// Sign a 32-byte prehash
    pub fn sign_hash(&self, hash: &B256) -> Result<Signature> {
        self.signer
            .sign_hash_sync(hash)
            .map_err(|e| Error::Wallet(format!("Signing failed: {}", e)))
    }

    /// Sign an EIP-712 payload supplied at runtime
    pub fn sign_typed_data(&self, payload: &TypedData) -> Result<Signature> {
        let hash = payload
            .eip712_signing_hash()
            .map_err(|e| Error::Wallet(format!("Cannot hash typed data: {}", e)))?;
        self.sign_hash(&hash)
    }

    /// Sign a fully specified transaction request into raw EIP-2718 bytes
    ///
    /// Nothing is filled in: nonce, gas and chain id must already be set.
    pub async fn sign_transaction(&self, request: TransactionRequest) -> Result<Bytes> {
        let envelope = request
            .build(&self.wallet)
            .await
            .map_err(|e| Error::Wallet(format!("Transaction signing failed: {}", e)))?;
        Ok(envelope.encoded_2718().into())
    }
}

// Implement Debug manually to avoid exposing the signer
impl std::fmt::Debug for SecureWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureWallet")
            .field("address", &self.address)
            .field("signer", &"[REDACTED]")
            .finish()
    }
}
