use async_trait::async_trait;
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Address, BlockNumber},
};
use std::str::FromStr;

use crate::{
    chains::client::NonceSource,
    config::ChainSettings,
    models::{AirdropCheckError, Result},
};

const SERVICE: &str = "chain node";

/// Public chain node queried for the account nonce.
pub struct NodeClient {
    provider: Provider<Http>,
}

impl NodeClient {
    pub fn new(settings: &ChainSettings) -> Result<Self> {
        let url = reqwest::Url::parse(&settings.node_rpc_url)
            .map_err(|e| AirdropCheckError::ConfigError(format!("Invalid node RPC URL: {}", e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| AirdropCheckError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            provider: Provider::new(Http::new_with_client(url, http_client)),
        })
    }
}

#[async_trait]
impl NonceSource for NodeClient {
    async fn transaction_count(&self, address: &str) -> Result<u64> {
        let address = Address::from_str(address)
            .map_err(|e| AirdropCheckError::InvalidInput(format!("Invalid address {}: {}", address, e)))?;

        let count = self.provider
            .get_transaction_count(address, Some(BlockNumber::Latest.into()))
            .await
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("eth_getTransactionCount failed: {}", e)))?;

        Ok(count.low_u64())
    }
}
