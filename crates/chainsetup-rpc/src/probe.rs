//! Endpoint liveness probing

use crate::types::{JsonRpcRequest, JsonRpcResponse, ProbeResult};
use crate::{RpcError, RpcResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Budget for a single probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(10_000);

const BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";

/// Decides whether an endpoint is alive.
///
/// Implementations never fail: every error is reported as
/// [`ProbeResult::invalid`].
#[async_trait]
pub trait EndpointProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Probes an endpoint by asking for its current block height
#[derive(Debug, Clone)]
pub struct RpcProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl RpcProber {
    pub fn new(timeout: Duration) -> RpcResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, timeout))
    }

    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Current block height of `url`, bounded by the probe timeout.
    ///
    /// The request future is dropped when the timer wins, which aborts the
    /// in-flight connection.
    pub async fn block_number(&self, url: &str) -> RpcResult<u64> {
        match tokio::time::timeout(self.timeout, self.request_block_number(url)).await {
            Ok(result) => result,
            Err(_) => Err(RpcError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }),
        }
    }

    async fn request_block_number(&self, url: &str) -> RpcResult<u64> {
        let response = self
            .client
            .post(url)
            .json(&JsonRpcRequest::new(BLOCK_NUMBER_METHOD, 1))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RpcError::MalformedResponse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        match body.result {
            Some(value) => parse_block_number(&value),
            None => Err(RpcError::MalformedResponse("missing result".to_string())),
        }
    }
}

#[async_trait]
impl EndpointProber for RpcProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        match self.block_number(url).await {
            Ok(height) => {
                debug!(url, height, "Endpoint responded");
                ProbeResult::valid(height)
            }
            Err(e) => {
                debug!(url, error = %e, "Endpoint probe failed");
                ProbeResult::invalid()
            }
        }
    }
}

/// Parse a block height from a hex quantity, a decimal string or a number
pub fn parse_block_number(value: &Value) -> RpcResult<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| RpcError::MalformedResponse(format!("not a block height: {}", n))),
        Value::String(s) => {
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) if !hex.is_empty() => u64::from_str_radix(hex, 16),
                Some(_) => return Err(RpcError::MalformedResponse("empty hex quantity".to_string())),
                None => s.parse::<u64>(),
            };
            parsed.map_err(|_| RpcError::MalformedResponse(format!("not a block height: {}", s)))
        }
        other => Err(RpcError::MalformedResponse(format!(
            "unexpected result type: {}",
            other
        ))),
    }
}
