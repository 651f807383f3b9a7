pub mod models;
pub mod config;
pub mod chains;
pub mod social;
pub mod scoring;
pub mod api;

pub use models::{
    AirdropCheckError, AirdropEstimate, EligibilityTier, OnChainActivitySummary, Provenance,
    Result, ScoreResult, SocialProfileSummary,
};
pub use config::Settings;
pub use scoring::{EligibilityChecker, EligibilityReport};
