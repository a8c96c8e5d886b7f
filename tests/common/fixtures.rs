use serde_json::{json, Value};

// Hardhat account #0 (DO NOT use in production!)
pub const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const PERMIT2: &str = "0x000000000022d473030f116ddee9f6b43ac78ba3";
pub const SETTLER: &str = "0x0000000000001ff3684f28c67538d4d072c22734";

// Scroll
pub const WETH: &str = "0x5300000000000000000000000000000000000004";
pub const WSTETH: &str = "0xf610a9dfb7c89644979b4a0f27063e9a7d7cda32";

pub fn sources() -> Value {
    json!({
        "sources": {
            "Uniswap_V3": {},
            "Curve": {},
            "Ambient": {}
        }
    })
}

pub fn price(allowance: Value) -> Value {
    json!({
        "liquidityAvailable": true,
        "buyAmount": "84000000000000000",
        "sellAmount": "100000000000000000",
        "issues": {
            "allowance": allowance,
            "balance": null,
            "simulationIncomplete": false
        },
        "tokenMetadata": {
            "buyToken": { "buyTaxBps": "0", "sellTaxBps": "0" },
            "sellToken": { "buyTaxBps": "0", "sellTaxBps": "0" }
        }
    })
}

pub fn permit_eip712() -> Value {
    json!({
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
            "verifyingContract": PERMIT2
        },
        "primaryType": "PermitTransferFrom",
        "message": {
            "permitted": {
                "token": WETH,
                "amount": "100000000000000000"
            },
            "spender": SETTLER,
            "nonce": "2241959297937691820908574931991575",
            "deadline": "1718669420"
        }
    })
}

/// What 0x returns when it cannot route the trade
pub fn no_liquidity() -> Value {
    json!({ "liquidityAvailable": false, "zid": "0x1" })
}

pub fn quote() -> Value {
    json!({
        "liquidityAvailable": true,
        "buyAmount": "84000000000000000",
        "sellAmount": "100000000000000000",
        "issues": { "allowance": null },
        "route": {
            "fills": [
                {
                    "from": WETH,
                    "to": WSTETH,
                    "source": "Uniswap_V3",
                    "proportionBps": "7000"
                },
                {
                    "from": WETH,
                    "to": WSTETH,
                    "source": "Curve",
                    "proportionBps": "3000"
                }
            ],
            "tokens": []
        },
        "fees": {
            "integratorFee": {
                "amount": "840000000000000",
                "token": WSTETH,
                "type": "volume"
            },
            "zeroExFee": null,
            "gasFee": null
        },
        "transaction": {
            "to": SETTLER,
            "data": "0xabc123",
            "gas": "288079",
            "gasPrice": "4837860000",
            "value": "0"
        },
        "permit2": {
            "type": "Permit2",
            "hash": "0xab0c8909f2f8daed2891cfb5e3b32e8e2bd4b5d3e1b2f3ae3b1d2c0b9a8f7e6d",
            "eip712": permit_eip712()
        },
        "zid": "0x5f8a2c1d"
    })
}
