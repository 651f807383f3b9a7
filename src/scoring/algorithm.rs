use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{OnChainActivitySummary, ScoreResult, SocialProfileSummary};

/// `(threshold, points)` pairs, highest first. A value strictly above a
/// threshold earns that band's points.
type Bands = [(i64, u32)];

const TRANSACTION_BANDS: &Bands = &[(100, 40), (50, 30), (20, 20), (5, 10)];
const ACTIVE_DAY_BANDS: &Bands = &[(90, 40), (60, 30), (30, 20), (10, 10)];
const EARLY_ADOPTER_BANDS: &Bands = &[(180, 20), (90, 15), (30, 10)];

const POST_BANDS: &Bands = &[(200, 30), (100, 25), (50, 20), (20, 15), (5, 10)];
const FOLLOWER_BANDS: &Bands = &[(1000, 25), (500, 20), (100, 15), (50, 10)];
const ACCOUNT_AGE_BANDS: &Bands = &[(180, 25), (90, 20), (30, 15), (7, 10)];
const PRO_BADGE_POINTS: u32 = 20;

/// Points earned per signal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub transactions: u32,
    pub active_days: u32,
    pub early_adopter: u32,
    pub posts: u32,
    pub followers: u32,
    pub account_age: u32,
    pub pro_badge: u32,
}

impl ScoreBreakdown {
    pub fn onchain_total(&self) -> u32 {
        self.transactions + self.active_days + self.early_adopter
    }

    pub fn social_total(&self) -> u32 {
        self.posts + self.followers + self.account_age + self.pro_badge
    }

    pub fn total(&self) -> u32 {
        self.onchain_total() + self.social_total()
    }
}

fn band_points(value: i64, bands: &Bands) -> u32 {
    bands
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub fn calculate_breakdown(
    onchain: &OnChainActivitySummary,
    social: &SocialProfileSummary,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    ScoreBreakdown {
        transactions: band_points(count(onchain.transaction_count), TRANSACTION_BANDS),
        active_days: band_points(count(onchain.active_day_count), ACTIVE_DAY_BANDS),
        early_adopter: onchain
            .days_since_first_activity(now)
            .map_or(0, |days| band_points(days, EARLY_ADOPTER_BANDS)),
        posts: band_points(count(social.post_count), POST_BANDS),
        followers: band_points(count(social.follower_count), FOLLOWER_BANDS),
        account_age: social
            .days_since_registration(now)
            .map_or(0, |days| band_points(days, ACCOUNT_AGE_BANDS)),
        pro_badge: if social.pro_badge { PRO_BADGE_POINTS } else { 0 },
    }
}

/// Deterministic for a fixed `now`. Day counts are measured against it, so
/// the same stored timestamps score higher as time passes.
pub fn calculate_score(
    onchain: &OnChainActivitySummary,
    social: &SocialProfileSummary,
    now: DateTime<Utc>,
) -> ScoreResult {
    ScoreResult::new(calculate_breakdown(onchain, social, now).total())
}
