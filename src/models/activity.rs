use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Where an on-chain summary came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Built from the full transfer history.
    Exact,
    /// Synthesized from the account nonce; day counts and first activity are guesses.
    Estimated,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Sent,
    Received,
}

impl TransferDirection {
    /// Parameter name the indexer uses to filter on this side of a transfer.
    pub fn address_param(&self) -> &'static str {
        match self {
            TransferDirection::Sent => "fromAddress",
            TransferDirection::Received => "toAddress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub direction: TransferDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnChainActivitySummary {
    pub transaction_count: u64,
    pub active_day_count: u64,
    pub first_activity: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    pub provenance: Provenance,
}

impl OnChainActivitySummary {
    /// No activity found. A valid, scorable state.
    pub fn empty() -> Self {
        Self {
            transaction_count: 0,
            active_day_count: 0,
            first_activity: None,
            last_activity: None,
            provenance: Provenance::Exact,
        }
    }

    /// Returned when even the fallback path could not reach the chain.
    pub fn unavailable() -> Self {
        Self {
            provenance: Provenance::Estimated,
            ..Self::empty()
        }
    }

    pub fn is_estimated(&self) -> bool {
        self.provenance == Provenance::Estimated
    }

    /// Whole days elapsed since the first recorded activity.
    pub fn days_since_first_activity(&self, now: DateTime<Utc>) -> Option<i64> {
        self.first_activity.map(|first| whole_days_between(first, now))
    }
}

/// Floor of the elapsed time in days; negative when `from` lies in the future.
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds().div_euclid(86_400)
}
