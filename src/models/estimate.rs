use serde::{Deserialize, Serialize};

pub const ESTIMATE_DISCLAIMER: &str = "These are speculative estimates based on historical airdrop patterns (ARB, STRK). Actual amounts may vary significantly. Base and Farcaster have not officially confirmed any token airdrops.";

/// Estimation scale. Distinct from the Low/Medium/High eligibility tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EstimateTier {
    #[serde(rename = "Tier 1 (High)")]
    Tier1,
    #[serde(rename = "Tier 2 (Medium)")]
    Tier2,
    #[serde(rename = "Tier 3 (Low)")]
    Tier3,
    #[serde(rename = "Below Threshold")]
    BelowThreshold,
}

impl EstimateTier {
    pub fn label(&self) -> &'static str {
        match self {
            EstimateTier::Tier1 => "Tier 1 (High)",
            EstimateTier::Tier2 => "Tier 2 (Medium)",
            EstimateTier::Tier3 => "Tier 3 (Low)",
            EstimateTier::BelowThreshold => "Below Threshold",
        }
    }

    /// Each tier maps onto exactly one probability label.
    pub fn probability(&self) -> Probability {
        match self {
            EstimateTier::Tier1 => Probability::High,
            EstimateTier::Tier2 => Probability::Medium,
            EstimateTier::Tier3 => Probability::Low,
            EstimateTier::BelowThreshold => Probability::VeryLow,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Probability {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl Probability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Probability::VeryLow => "Very Low",
            Probability::Low => "Low",
            Probability::Medium => "Medium",
            Probability::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEstimate {
    pub tier: EstimateTier,
    pub points: u64,
    pub estimate_min: u64,
    pub estimate_max: u64,
    pub probability: Probability,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AirdropEstimate {
    /// Chain network estimate.
    pub base: NetworkEstimate,
    /// Social network estimate.
    pub farcaster: NetworkEstimate,
    pub disclaimer: String,
}
