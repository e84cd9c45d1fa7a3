//! Wire and result types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of probing one candidate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProbeResult {
    pub valid: bool,
    pub observed_height: Option<u64>,
}

impl ProbeResult {
    pub fn valid(height: u64) -> Self {
        Self {
            valid: true,
            observed_height: Some(height),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            observed_height: None,
        }
    }
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Vec<Value>,
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params: Vec::new(),
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// The part of a registry chain document we read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainRecord {
    /// Advertised RPC endpoints; absent means no candidates
    #[serde(default)]
    pub rpc: Option<Vec<String>>,
}
