use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::SocialSettings,
    models::{AirdropCheckError, Result, SocialProfileSummary},
    social::client::ProfileSource,
};

const SERVICE: &str = "neynar";

/// Farcaster profile lookups through the Neynar REST API.
pub struct NeynarClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct BulkUsersResponse {
    #[serde(default)]
    users: Vec<NeynarUser>,
}

#[derive(Deserialize)]
struct NeynarUser {
    fid: u64,
    username: String,
    display_name: Option<String>,
    registered_at: Option<String>,
    cast_count: Option<u64>,
    follower_count: Option<u64>,
    following_count: Option<u64>,
    power_badge: Option<bool>,
}

impl From<NeynarUser> for SocialProfileSummary {
    fn from(user: NeynarUser) -> Self {
        let registered_at = user
            .registered_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|at| at.with_timezone(&Utc));

        Self {
            fid: user.fid,
            display_name: user
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| user.username.clone()),
            username: user.username,
            registered_at,
            post_count: user.cast_count.unwrap_or(0),
            follower_count: user.follower_count.unwrap_or(0),
            following_count: user.following_count.unwrap_or(0),
            pro_badge: user.power_badge.unwrap_or(false),
        }
    }
}

impl NeynarClient {
    pub fn new(settings: &SocialSettings, api_key: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| AirdropCheckError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ProfileSource for NeynarClient {
    async fn profile(&self, fid: u64) -> Result<Option<SocialProfileSummary>> {
        let response = self.http_client
            .get(format!("{}/v2/farcaster/user/bulk", self.base_url))
            .query(&[("fids", fid.to_string())])
            .header("api_key", &self.api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("HTTP request failed: {}", e.without_url())))?
            .error_for_status()
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("Bad status: {}", e.without_url())))?;

        let body: BulkUsersResponse = response.json().await
            .map_err(|e| AirdropCheckError::upstream(SERVICE, format!("Failed to parse response: {}", e.without_url())))?;

        debug!("Neynar returned {} users for fid {}", body.users.len(), fid);

        Ok(body.users.into_iter().next().map(SocialProfileSummary::from))
    }
}
