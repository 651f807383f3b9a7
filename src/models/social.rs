use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::activity::whole_days_between;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfileSummary {
    pub fid: u64,
    pub username: String,
    pub display_name: String,
    pub registered_at: Option<DateTime<Utc>>,
    pub post_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
    pub pro_badge: bool,
}

impl SocialProfileSummary {
    /// Stand-in used when a request resolves only the on-chain side.
    pub fn empty() -> Self {
        Self {
            fid: 0,
            username: String::new(),
            display_name: String::new(),
            registered_at: None,
            post_count: 0,
            follower_count: 0,
            following_count: 0,
            pro_badge: false,
        }
    }

    pub fn days_since_registration(&self, now: DateTime<Utc>) -> Option<i64> {
        self.registered_at.map(|at| whole_days_between(at, now))
    }
}
