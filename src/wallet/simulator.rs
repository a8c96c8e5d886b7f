//! Revert reason extraction for failed `eth_call` simulations
//!
//! alloy surfaces reverts as RPC error strings; this pulls the human-readable
//! part out so approval failures log something actionable.

use alloy::hex;

/// `Error(string)` selector
const ERROR_STRING_SELECTOR: &str = "0x08c379a0";

/// Parse revert reason from RPC error message
pub fn revert_reason(error: &str) -> String {
    if !error.contains("execution reverted") {
        // Return the full error if we can't parse it
        return error.to_string();
    }

    // Try to extract the reason string
    if let Some(start) = error.find("revert: ") {
        let reason = &error[start + 8..];
        if let Some(end) = reason.find('"') {
            return reason[..end].to_string();
        }
        return reason.to_string();
    }

    // Try to extract hex data
    if let Some(start) = error.find("0x") {
        let hex_data = &error[start..];
        let end = hex_data[2..]
            .find(|c: char| !c.is_ascii_hexdigit())
            .map(|i| i + 2)
            .unwrap_or(hex_data.len());
        let data = &hex_data[..end];

        // Error(string): selector, offset word, length word, then the bytes
        if data.starts_with(ERROR_STRING_SELECTOR) && data.len() > 138 {
            if let Ok(decoded) = hex::decode(&data[138..]) {
                let filtered: Vec<u8> = decoded.into_iter().filter(|&b| b != 0).collect();
                if let Ok(s) = String::from_utf8(filtered) {
                    return s;
                }
            }
        }
        return format!("Reverted with data: {}", data);
    }

    "execution reverted".to_string()
}
