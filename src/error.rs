//! Error types for the Permit2 swap

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("0x API error: {0}")]
    Aggregator(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Approval failed: {0}")]
    Approval(String),

    #[error("Transaction simulation failed: {0}")]
    Simulation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to obtain signature or transaction data")]
    MissingSignature,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
