use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};

use crate::models::{OnChainActivitySummary, Provenance, TransferRecord};

/// Upper bound on the active-day guess made from a nonce.
pub const MAX_ESTIMATED_ACTIVE_DAYS: u64 = 365;

/// Synthesized first activity is never more recent than this.
pub const MIN_ESTIMATED_ACCOUNT_AGE_DAYS: i64 = 7;

/// Merge both sides of the history into one exact summary.
///
/// A transfer present in both sets (self-transfers) is counted once.
pub fn summarize_transfers(
    sent: Vec<TransferRecord>,
    received: Vec<TransferRecord>,
) -> OnChainActivitySummary {
    let by_hash: HashMap<String, TransferRecord> = sent
        .into_iter()
        .chain(received)
        .map(|record| (record.hash.clone(), record))
        .collect();

    if by_hash.is_empty() {
        return OnChainActivitySummary::empty();
    }

    let mut records: Vec<TransferRecord> = by_hash.into_values().collect();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let active_days: HashSet<NaiveDate> = records
        .iter()
        .map(|record| record.timestamp.date_naive())
        .collect();

    OnChainActivitySummary {
        transaction_count: records.len() as u64,
        active_day_count: active_days.len() as u64,
        first_activity: records.last().map(|r| r.timestamp),
        last_activity: records.first().map(|r| r.timestamp),
        provenance: Provenance::Exact,
    }
}

/// Approximate a summary from the account nonce alone.
pub fn estimate_from_nonce(
    transaction_count: u64,
    now: DateTime<Utc>,
    genesis: DateTime<Utc>,
) -> OnChainActivitySummary {
    let active_day_count = (transaction_count / 2).min(MAX_ESTIMATED_ACTIVE_DAYS);

    let walked_back = now - Duration::days(active_day_count as i64);
    let latest_allowed = now - Duration::days(MIN_ESTIMATED_ACCOUNT_AGE_DAYS);
    let first_activity = walked_back.min(latest_allowed).max(genesis);

    OnChainActivitySummary {
        transaction_count,
        active_day_count,
        first_activity: Some(first_activity),
        last_activity: Some(now),
        provenance: Provenance::Estimated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransferDirection;
    use chrono::TimeZone;

    fn record(hash: &str, timestamp: DateTime<Utc>, direction: TransferDirection) -> TransferRecord {
        TransferRecord {
            hash: hash.to_string(),
            timestamp,
            direction,
        }
    }

    fn genesis() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 8, 9, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let summary = summarize_transfers(vec![], vec![]);
        assert_eq!(summary, OnChainActivitySummary::empty());
        assert!(!summary.is_estimated());
    }

    #[test]
    fn test_self_transfer_counted_once() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let sent = vec![record("0x01", at, TransferDirection::Sent)];
        let received = vec![record("0x01", at, TransferDirection::Received)];

        let summary = summarize_transfers(sent, received);
        assert_eq!(summary.transaction_count, 1);
        assert_eq!(summary.active_day_count, 1);
        assert_eq!(summary.first_activity, Some(at));
        assert_eq!(summary.last_activity, Some(at));
    }

    #[test]
    fn test_active_days_use_utc_dates() {
        let late = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 59).unwrap();
        let early_next = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 1).unwrap();
        let same_day = Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap();

        let summary = summarize_transfers(
            vec![
                record("0x01", late, TransferDirection::Sent),
                record("0x02", same_day, TransferDirection::Sent),
            ],
            vec![record("0x03", early_next, TransferDirection::Received)],
        );

        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.active_day_count, 2);
        assert_eq!(summary.first_activity, Some(same_day));
        assert_eq!(summary.last_activity, Some(early_next));
        assert_eq!(summary.provenance, Provenance::Exact);
    }

    #[test]
    fn test_estimate_caps_active_days() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let summary = estimate_from_nonce(10_000, now, genesis());
        assert_eq!(summary.active_day_count, 365);
        assert_eq!(summary.first_activity, Some(now - Duration::days(365)));
        assert_eq!(summary.last_activity, Some(now));
        assert!(summary.is_estimated());

        let summary = estimate_from_nonce(41, now, genesis());
        assert_eq!(summary.active_day_count, 20);
        assert_eq!(summary.first_activity, Some(now - Duration::days(20)));
    }

    #[test]
    fn test_estimate_first_activity_is_at_least_a_week_old() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let summary = estimate_from_nonce(4, now, genesis());

        assert_eq!(summary.active_day_count, 2);
        assert_eq!(summary.first_activity, Some(now - Duration::days(7)));
    }

    #[test]
    fn test_estimate_never_predates_genesis() {
        let now = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
        let summary = estimate_from_nonce(1_000, now, genesis());

        assert_eq!(summary.active_day_count, 365);
        assert_eq!(summary.first_activity, Some(genesis()));
    }
}
