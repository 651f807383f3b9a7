use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{
    AirdropEstimate, EstimateTier, NetworkEstimate, OnChainActivitySummary,
    SocialProfileSummary, ESTIMATE_DISCLAIMER,
};

const EARLY_ADOPTER_DAYS: i64 = 180;

fn early_adopter_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

fn pro_badge_multiplier() -> Decimal {
    Decimal::new(13, 1)
}

/// Token amount ranges per tier, before bonuses.
fn chain_range(tier: EstimateTier) -> (u64, u64) {
    match tier {
        EstimateTier::Tier1 => (5_000, 10_000),
        EstimateTier::Tier2 => (1_000, 5_000),
        EstimateTier::Tier3 => (100, 1_000),
        EstimateTier::BelowThreshold => (0, 100),
    }
}

fn social_range(tier: EstimateTier) -> (u64, u64) {
    match tier {
        EstimateTier::Tier1 => (2_000, 5_000),
        EstimateTier::Tier2 => (500, 2_000),
        EstimateTier::Tier3 => (100, 500),
        EstimateTier::BelowThreshold => (0, 100),
    }
}

fn chain_tier(points: u64) -> EstimateTier {
    match points {
        p if p > 500 => EstimateTier::Tier1,
        p if p >= 200 => EstimateTier::Tier2,
        p if p >= 50 => EstimateTier::Tier3,
        _ => EstimateTier::BelowThreshold,
    }
}

fn social_tier(points: f64) -> EstimateTier {
    if points > 300.0 {
        EstimateTier::Tier1
    } else if points >= 100.0 {
        EstimateTier::Tier2
    } else if points >= 20.0 {
        EstimateTier::Tier3
    } else {
        EstimateTier::BelowThreshold
    }
}

/// Multiply and truncate toward zero.
fn scale(value: u64, factor: Decimal) -> u64 {
    (Decimal::from(value) * factor).trunc().to_u64().unwrap_or(u64::MAX)
}

/// `transactions + 5 * active days`.
pub fn chain_points(onchain: &OnChainActivitySummary) -> u64 {
    onchain
        .transaction_count
        .saturating_add(onchain.active_day_count.saturating_mul(5))
}

/// `2 * posts + followers + days registered / 30 + 100 if badged`. Fractional.
pub fn social_points(social: &SocialProfileSummary, now: DateTime<Utc>) -> f64 {
    let days_registered = social.days_since_registration(now).unwrap_or(0) as f64;
    let badge_bonus = if social.pro_badge { 100.0 } else { 0.0 };

    social.post_count as f64 * 2.0 + social.follower_count as f64 + days_registered / 30.0 + badge_bonus
}

pub fn estimate_chain(onchain: &OnChainActivitySummary, now: DateTime<Utc>) -> NetworkEstimate {
    let points = chain_points(onchain);
    let tier = chain_tier(points);
    let (mut min, mut max) = chain_range(tier);

    if onchain.days_since_first_activity(now).is_some_and(|days| days > EARLY_ADOPTER_DAYS) {
        min = scale(min, early_adopter_multiplier());
        max = scale(max, early_adopter_multiplier());
    }

    NetworkEstimate {
        tier,
        points,
        estimate_min: min,
        estimate_max: max,
        probability: tier.probability(),
    }
}

pub fn estimate_social(social: &SocialProfileSummary, now: DateTime<Utc>) -> NetworkEstimate {
    let points = social_points(social, now);
    let tier = social_tier(points);
    let (mut min, mut max) = social_range(tier);

    if social.pro_badge {
        min = scale(min, pro_badge_multiplier());
        max = scale(max, pro_badge_multiplier());
    }

    NetworkEstimate {
        tier,
        points: points.max(0.0).floor() as u64,
        estimate_min: min,
        estimate_max: max,
        probability: tier.probability(),
    }
}

/// Independent of the eligibility score; both networks are estimated
/// from their own signals only.
pub fn estimate_airdrop(
    onchain: &OnChainActivitySummary,
    social: &SocialProfileSummary,
    now: DateTime<Utc>,
) -> AirdropEstimate {
    AirdropEstimate {
        base: estimate_chain(onchain, now),
        farcaster: estimate_social(social, now),
        disclaimer: ESTIMATE_DISCLAIMER.to_string(),
    }
}
