//! Environment-based secret loading
//!
//! All three variables are required; the first one found missing (or empty)
//! aborts startup before any network activity.
//!
//! # Examples
//!
//! ```bash
//! export PRIVATE_KEY="ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
//! export ZERO_EX_API_KEY="YOUR_KEY"
//! export ALCHEMY_HTTP_TRANSPORT_URL="https://scroll-mainnet.g.alchemy.com/v2/YOUR_KEY"
//! ```
//!
//! A `.env` file in the working directory is loaded by the binary before
//! these are read.

use super::{Config, SwapSettings};
use crate::{Error, Result};
use secrecy::SecretString;
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Signing key, hex with or without `0x`
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
/// 0x API key
pub const API_KEY_ENV: &str = "ZERO_EX_API_KEY";
/// HTTP RPC endpoint
pub const RPC_URL_ENV: &str = "ALCHEMY_HTTP_TRANSPORT_URL";

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a dotenv-formatted file without touching
    /// the process environment
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) =
                item.map_err(|e| Error::Config(format!("Malformed {}: {}", path.display(), e)))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_key = require(&lookup, PRIVATE_KEY_ENV)?;
        let api_key = require(&lookup, API_KEY_ENV)?;
        let rpc_url = require(&lookup, RPC_URL_ENV)?;

        let rpc_url: Url = rpc_url
            .parse()
            .map_err(|e| Error::Config(format!("Invalid {}: {}", RPC_URL_ENV, e)))?;

        tracing::debug!(rpc_host = ?rpc_url.host_str(), "Loaded configuration");

        Ok(Self {
            signing_key: SecretString::from(prefixed_key(signing_key)),
            api_key: SecretString::from(api_key),
            rpc_url,
            swap: SwapSettings::default(),
        })
    }
}

fn require<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::Config(format!(
            "Missing required environment variable {}",
            name
        ))),
    }
}

fn prefixed_key(key: String) -> String {
    if key.starts_with("0x") {
        key
    } else {
        format!("0x{}", key)
    }
}
