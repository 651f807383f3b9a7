use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::{
    chains::client::TransferIndexer,
    config::ChainSettings,
    models::{AirdropCheckError, Result, TransferDirection, TransferRecord},
};

const SERVICE: &str = "alchemy";

/// Native, internal and common token-standard transfers.
pub const TRANSFER_CATEGORIES: [&str; 5] = ["external", "internal", "erc20", "erc721", "erc1155"];

/// Indexer client speaking `alchemy_getAssetTransfers` over JSON-RPC.
///
/// The API key is part of the endpoint path, so reqwest errors are stripped
/// of their URL before they reach an error message.
pub struct AlchemyClient {
    http_client: reqwest::Client,
    endpoint: String,
    max_count: u32,
}

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Deserialize, Default)]
struct AssetTransfersResult {
    #[serde(default)]
    transfers: Vec<AssetTransfer>,
}

#[derive(Deserialize)]
struct AssetTransfer {
    hash: Option<String>,
    metadata: Option<TransferMetadata>,
}

#[derive(Deserialize)]
struct TransferMetadata {
    #[serde(rename = "blockTimestamp")]
    block_timestamp: Option<String>,
}

impl AssetTransfer {
    fn into_record(self, direction: TransferDirection) -> Option<TransferRecord> {
        let hash = self.hash.filter(|h| !h.is_empty())?;
        let raw = self.metadata?.block_timestamp?;
        let timestamp = DateTime::parse_from_rfc3339(&raw).ok()?.with_timezone(&Utc);

        Some(TransferRecord {
            hash,
            timestamp,
            direction,
        })
    }
}

impl AlchemyClient {
    pub fn new(settings: &ChainSettings, api_key: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| AirdropCheckError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/{}", settings.indexer_url.trim_end_matches('/'), api_key),
            max_count: settings.max_transfers,
        })
    }

    fn transfer_params(&self, address: &str, direction: TransferDirection) -> serde_json::Value {
        let mut filter = json!({
            "category": TRANSFER_CATEGORIES,
            "maxCount": format!("{:#x}", self.max_count),
            "order": "desc",
            "withMetadata": true,
        });
        filter[direction.address_param()] = json!(address);

        json!([filter])
    }

    async fn make_rpc_request<T: for<'de> Deserialize<'de> + Default>(
        &self,
        method: &str,
        params: serde_json::Value,
        id: u64,
    ) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        };

        let response = self.http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("HTTP request failed: {}", e.without_url())))?
            .error_for_status()
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("Bad status: {}", e.without_url())))?;

        let rpc_response: RpcResponse<T> = response.json().await
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("Failed to parse response: {}", e.without_url())))?;

        if let Some(error) = rpc_response.error {
            return Err(AirdropCheckError::upstream(
                SERVICE,
                format!("RPC error {}: {}", error.code, error.message),
            ));
        }

        // A missing result is an empty page, not a failure.
        Ok(rpc_response.result.unwrap_or_default())
    }
}

#[async_trait]
impl TransferIndexer for AlchemyClient {
    async fn asset_transfers(
        &self,
        address: &str,
        direction: TransferDirection,
    ) -> Result<Vec<TransferRecord>> {
        let id = match direction {
            TransferDirection::Sent => 1,
            TransferDirection::Received => 2,
        };
        let result: AssetTransfersResult = self
            .make_rpc_request("alchemy_getAssetTransfers", self.transfer_params(address, direction), id)
            .await?;

        let fetched = result.transfers.len();
        let records: Vec<TransferRecord> = result
            .transfers
            .into_iter()
            .filter_map(|t| t.into_record(direction))
            .collect();

        debug!(
            "Fetched {} {:?} transfers for {} ({} without hash or timestamp)",
            records.len(),
            direction,
            address,
            fetched - records.len()
        );

        Ok(records)
    }
}
