use async_trait::async_trait;
use crate::models::{Result, SocialProfileSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Look up a profile by platform id. `Ok(None)` means the lookup
    /// succeeded but no such account exists.
    async fn profile(&self, fid: u64) -> Result<Option<SocialProfileSummary>>;
}
