use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    config::SocialSettings,
    models::{AirdropCheckError, Result, SocialProfileSummary},
    social::{client::ProfileSource, neynar::NeynarClient},
};

/// Resolves the social side of a check.
pub struct SocialProfileFetcher {
    source: Option<Arc<dyn ProfileSource>>,
}

impl SocialProfileFetcher {
    /// `None` serves the fixed demo profile without touching the network.
    pub fn new(source: Option<Arc<dyn ProfileSource>>) -> Self {
        Self { source }
    }

    pub fn from_settings(settings: &SocialSettings) -> Result<Self> {
        let source = match settings.credential() {
            Some(key) => Some(Arc::new(NeynarClient::new(settings, key)?) as Arc<dyn ProfileSource>),
            None => None,
        };

        Ok(Self::new(source))
    }

    pub async fn fetch(&self, fid: u64) -> Result<SocialProfileSummary> {
        self.fetch_at(fid, Utc::now()).await
    }

    pub async fn fetch_at(&self, fid: u64, now: DateTime<Utc>) -> Result<SocialProfileSummary> {
        let Some(source) = &self.source else {
            info!("No social API credential configured, using demo profile for fid {}", fid);
            return Ok(placeholder_profile(fid, now));
        };

        match source.profile(fid).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => {
                error!("Social profile lookup for fid {} returned no user", fid);
                Err(AirdropCheckError::ProfileNotFound(fid))
            }
            Err(e) => {
                error!("Social profile lookup for fid {} failed: {}", fid, e);
                Err(e)
            }
        }
    }
}

/// Deterministic demo profile so the pipeline runs without credentials.
pub fn placeholder_profile(fid: u64, now: DateTime<Utc>) -> SocialProfileSummary {
    SocialProfileSummary {
        fid,
        username: "demo_user".to_string(),
        display_name: "Demo User".to_string(),
        registered_at: Some(now - Duration::days(180)),
        post_count: 150,
        follower_count: 200,
        following_count: 180,
        pro_badge: false,
    }
}
