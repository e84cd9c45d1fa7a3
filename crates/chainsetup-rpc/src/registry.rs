//! Chain registry access

use crate::types::ChainRecord;
use crate::{RpcError, RpcResult};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of candidate endpoints for a network.
///
/// `None` means the source could not answer; callers treat it the same as
/// an empty list.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch_candidates(&self, network_id: &str) -> Option<Vec<String>>;
}

/// Fetches per-network documents from an HTTP chain registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    url_template: String,
}

impl RegistryClient {
    /// `url_template` must contain `{id}`, replaced by the network id
    pub fn new(url_template: impl Into<String>) -> RpcResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, url_template))
    }

    pub fn with_client(client: reqwest::Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    pub fn chain_url(&self, network_id: &str) -> String {
        self.url_template.replace("{id}", network_id)
    }

    /// Registry document for `network_id`
    pub async fn fetch_chain(&self, network_id: &str) -> RpcResult<ChainRecord> {
        let url = self.chain_url(network_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<ChainRecord>()
            .await
            .map_err(|e| RpcError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl CandidateSource for RegistryClient {
    async fn fetch_candidates(&self, network_id: &str) -> Option<Vec<String>> {
        match self.fetch_chain(network_id).await {
            Ok(record) => {
                debug!(
                    chain_id = network_id,
                    candidates = record.rpc.as_ref().map_or(0, Vec::len),
                    "Fetched registry entry"
                );
                record.rpc
            }
            Err(e) => {
                warn!(chain_id = network_id, error = %e, "Error fetching chain info");
                None
            }
        }
    }
}
