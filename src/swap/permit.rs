//! Permit2 signing and calldata splicing
//!
//! The settler contract expects the permit signature appended to the quote
//! calldata behind a 32-byte big-endian length word:
//!
//! ```text
//! data' = data || uint256(len(sig)) || sig
//! ```

use crate::aggregator::QuoteResponse;
use crate::wallet::ChainOps;
use crate::{Error, Result};
use alloy::dyn_abi::TypedData;
use alloy::primitives::{Bytes, Signature, U256};

/// Whether the quote needs a Permit2 signature
#[derive(Debug, Clone, Copy)]
pub enum PermitRequirement<'a> {
    Required(&'a TypedData),
    NotRequired,
}

impl<'a> PermitRequirement<'a> {
    pub fn from_quote(quote: &'a QuoteResponse) -> Self {
        match quote.permit_payload() {
            Some(payload) => PermitRequirement::Required(payload),
            None => PermitRequirement::NotRequired,
        }
    }
}

/// Append a length-prefixed signature to calldata
pub fn splice_signature(data: &[u8], signature: &[u8]) -> Bytes {
    let length = U256::from(signature.len()).to_be_bytes::<32>();

    let mut spliced = Vec::with_capacity(data.len() + length.len() + signature.len());
    spliced.extend_from_slice(data);
    spliced.extend_from_slice(&length);
    spliced.extend_from_slice(signature);
    spliced.into()
}

/// A quote that is ready to submit
///
/// Only constructible from both a signature and calldata, so a transaction
/// can never go out without its permit.
#[derive(Debug, Clone)]
pub struct SignedQuote {
    signature: Signature,
    data: Bytes,
}

impl SignedQuote {
    pub fn new(data: &[u8], signature: Signature) -> Self {
        let data = splice_signature(data, &signature.as_bytes());
        Self { signature, data }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Calldata with the signature spliced in
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// Sign the quote's Permit2 payload
///
/// Returns `Ok(None)` when the quote carries no payload, in which case
/// nothing is submitted. A signing error is logged; the run then fails
/// with [`Error::MissingSignature`] before anything is broadcast.
pub async fn sign_quote<C: ChainOps + ?Sized>(
    chain: &C,
    quote: &QuoteResponse,
) -> Result<Option<SignedQuote>> {
    let payload = match PermitRequirement::from_quote(quote) {
        PermitRequirement::Required(payload) => payload,
        PermitRequirement::NotRequired => {
            println!("Quote carries no Permit2 payload, nothing to sign");
            return Ok(None);
        }
    };

    let signature = match chain.sign_typed_data(payload).await {
        Ok(signature) => {
            println!("Signed permit2.eip712");
            Some(signature)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error signing permit2.eip712");
            None
        }
    };

    let data = quote.executable().and_then(|tx| tx.data.as_ref());
    match (signature, data) {
        (Some(signature), Some(data)) => {
            let signed = SignedQuote::new(data, signature);
            tracing::debug!(
                original_len = data.len(),
                spliced_len = signed.data().len(),
                "Appended signature to transaction data"
            );
            Ok(Some(signed))
        }
        _ => {
            tracing::error!("Failed to obtain signature or transaction data");
            Err(Error::MissingSignature)
        }
    }
}
