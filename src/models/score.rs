use serde::{Deserialize, Serialize};

/// Maximum attainable score: 100 on-chain plus 100 social.
pub const MAX_SCORE: u32 = 200;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EligibilityTier {
    Low,
    Medium,
    High,
}

impl EligibilityTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 120 => EligibilityTier::High,
            s if s >= 60 => EligibilityTier::Medium,
            _ => EligibilityTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityTier::Low => "Low",
            EligibilityTier::Medium => "Medium",
            EligibilityTier::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    pub tier: EligibilityTier,
}

/// The slice of a result the badge metadata and image renderers consume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeData {
    pub tier: EligibilityTier,
    pub score: u32,
}

impl ScoreResult {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            tier: EligibilityTier::from_score(score),
        }
    }

    pub fn badge(&self) -> BadgeData {
        BadgeData {
            tier: self.tier,
            score: self.score,
        }
    }
}
