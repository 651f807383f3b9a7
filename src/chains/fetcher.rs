use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    chains::{
        alchemy::AlchemyClient,
        client::{NonceSource, TransferIndexer},
        node::NodeClient,
        normalizer::{estimate_from_nonce, summarize_transfers},
    },
    config::ChainSettings,
    models::{AirdropCheckError, OnChainActivitySummary, Result, TransferDirection},
};

/// Resolves the on-chain side of a check.
///
/// The indexer gives exact history. Without a credential, or when either
/// indexer query fails, the node nonce is used to build an estimate.
/// `fetch` never fails.
pub struct TransactionFetcher {
    indexer: Option<Arc<dyn TransferIndexer>>,
    node: Arc<dyn NonceSource>,
    genesis: DateTime<Utc>,
}

impl TransactionFetcher {
    pub fn new(
        indexer: Option<Arc<dyn TransferIndexer>>,
        node: Arc<dyn NonceSource>,
        genesis: DateTime<Utc>,
    ) -> Self {
        Self { indexer, node, genesis }
    }

    pub fn from_settings(settings: &ChainSettings) -> Result<Self> {
        let indexer = match settings.indexer_credential() {
            Some(key) => Some(Arc::new(AlchemyClient::new(settings, key)?) as Arc<dyn TransferIndexer>),
            None => None,
        };
        let node = Arc::new(NodeClient::new(settings)?) as Arc<dyn NonceSource>;
        let genesis = settings.genesis().map_err(AirdropCheckError::ConfigError)?;

        Ok(Self::new(indexer, node, genesis))
    }

    pub async fn fetch(&self, address: &str) -> OnChainActivitySummary {
        self.fetch_at(address, Utc::now()).await
    }

    pub async fn fetch_at(&self, address: &str, now: DateTime<Utc>) -> OnChainActivitySummary {
        match &self.indexer {
            Some(indexer) => match fetch_history(indexer.as_ref(), address).await {
                Ok(summary) => return summary,
                Err(e) => warn!("Indexer failed for {}, falling back to node estimate: {}", address, e),
            },
            None => info!("No indexer credential configured, estimating activity for {}", address),
        }

        match self.node.transaction_count(address).await {
            Ok(count) => estimate_from_nonce(count, now, self.genesis),
            Err(e) => {
                warn!("Node fallback failed for {}: {}", address, e);
                OnChainActivitySummary::unavailable()
            }
        }
    }
}

/// Both sides are requested together; if either fails the pair is abandoned.
async fn fetch_history(
    indexer: &dyn TransferIndexer,
    address: &str,
) -> Result<OnChainActivitySummary> {
    let (sent, received) = futures::try_join!(
        indexer.asset_transfers(address, TransferDirection::Sent),
        indexer.asset_transfers(address, TransferDirection::Received),
    )?;

    Ok(summarize_transfers(sent, received))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::client::{MockNonceSource, MockTransferIndexer};
    use crate::models::{Provenance, TransferRecord};
    use chrono::{Duration, TimeZone};
    use mockall::predicate::eq;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f6e842";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn genesis() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 8, 9, 0, 0, 0).unwrap()
    }

    fn unused_node() -> MockNonceSource {
        let mut node = MockNonceSource::new();
        node.expect_transaction_count().never();
        node
    }

    #[tokio::test]
    async fn test_exact_history_from_indexer() {
        let at = now() - Duration::days(3);
        let mut indexer = MockTransferIndexer::new();
        indexer
            .expect_asset_transfers()
            .with(eq(ADDRESS), eq(TransferDirection::Sent))
            .times(1)
            .returning(move |_, direction| {
                Ok(vec![
                    TransferRecord { hash: "0x01".into(), timestamp: at, direction },
                    TransferRecord { hash: "0x02".into(), timestamp: at, direction },
                ])
            });
        indexer
            .expect_asset_transfers()
            .with(eq(ADDRESS), eq(TransferDirection::Received))
            .times(1)
            .returning(move |_, direction| {
                Ok(vec![TransferRecord { hash: "0x02".into(), timestamp: at, direction }])
            });

        let fetcher = TransactionFetcher::new(Some(Arc::new(indexer)), Arc::new(unused_node()), genesis());
        let summary = fetcher.fetch_at(ADDRESS, now()).await;

        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.active_day_count, 1);
        assert_eq!(summary.provenance, Provenance::Exact);
    }

    #[tokio::test]
    async fn test_empty_history_is_not_an_error() {
        let mut indexer = MockTransferIndexer::new();
        indexer.expect_asset_transfers().times(2).returning(|_, _| Ok(vec![]));

        let fetcher = TransactionFetcher::new(Some(Arc::new(indexer)), Arc::new(unused_node()), genesis());
        let summary = fetcher.fetch_at(ADDRESS, now()).await;

        assert_eq!(summary, OnChainActivitySummary::empty());
    }

    #[tokio::test]
    async fn test_indexer_failure_falls_back_to_node() {
        let mut indexer = MockTransferIndexer::new();
        indexer
            .expect_asset_transfers()
            .returning(|_, _| Err(AirdropCheckError::upstream("alchemy", "503 Service Unavailable")));

        let mut node = MockNonceSource::new();
        node.expect_transaction_count()
            .with(eq(ADDRESS))
            .times(1)
            .returning(|_| Ok(120));

        let fetcher = TransactionFetcher::new(Some(Arc::new(indexer)), Arc::new(node), genesis());
        let summary = fetcher.fetch_at(ADDRESS, now()).await;

        assert_eq!(summary.transaction_count, 120);
        assert_eq!(summary.active_day_count, 60);
        assert_eq!(summary.first_activity, Some(now() - Duration::days(60)));
        assert_eq!(summary.last_activity, Some(now()));
        assert!(summary.is_estimated());
    }

    #[tokio::test]
    async fn test_missing_credential_uses_node() {
        let mut node = MockNonceSource::new();
        node.expect_transaction_count().times(1).returning(|_| Ok(9));

        let fetcher = TransactionFetcher::new(None, Arc::new(node), genesis());
        let summary = fetcher.fetch_at(ADDRESS, now()).await;

        assert_eq!(summary.transaction_count, 9);
        assert_eq!(summary.active_day_count, 4);
        assert!(summary.is_estimated());
    }

    #[tokio::test]
    async fn test_total_failure_yields_zero_estimate() {
        let mut node = MockNonceSource::new();
        node.expect_transaction_count()
            .returning(|_| Err(AirdropCheckError::upstream("chain node", "connection refused")));

        let fetcher = TransactionFetcher::new(None, Arc::new(node), genesis());
        let summary = fetcher.fetch_at(ADDRESS, now()).await;

        assert_eq!(summary, OnChainActivitySummary::unavailable());
    }
}
