use async_trait::async_trait;
use crate::models::{Result, TransferDirection, TransferRecord};

/// Full transfer history for an address, one side at a time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransferIndexer: Send + Sync {
    /// Transfers where `address` is on the given side, newest first.
    /// Records without a hash or a parseable block timestamp are dropped.
    async fn asset_transfers(
        &self,
        address: &str,
        direction: TransferDirection,
    ) -> Result<Vec<TransferRecord>>;
}

/// Plain chain node access, used when the indexer is unavailable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NonceSource: Send + Sync {
    /// Number of transactions sent from `address` at the latest block.
    async fn transaction_count(&self, address: &str) -> Result<u64>;
}
