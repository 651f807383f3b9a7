use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    chains::TransactionFetcher,
    config::Settings,
    models::{
        AirdropEstimate, EligibilityTier, OnChainActivitySummary, Result, ScoreResult,
        SocialProfileSummary,
    },
    scoring::{
        algorithm::calculate_score,
        estimate::estimate_airdrop,
        input::{classify, CheckInput},
    },
    social::SocialProfileFetcher,
};

/// Everything returned for one eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub onchain: OnChainActivitySummary,
    pub farcaster: SocialProfileSummary,
    pub score: u32,
    pub eligibility: EligibilityTier,
    pub airdrop_estimate: AirdropEstimate,
}

impl EligibilityReport {
    /// Score and estimate both summaries against the same instant.
    pub fn assemble(
        onchain: OnChainActivitySummary,
        farcaster: SocialProfileSummary,
        now: DateTime<Utc>,
    ) -> Self {
        let ScoreResult { score, tier } = calculate_score(&onchain, &farcaster, now);
        let airdrop_estimate = estimate_airdrop(&onchain, &farcaster, now);

        Self {
            onchain,
            farcaster,
            score,
            eligibility: tier,
            airdrop_estimate,
        }
    }

    pub fn score_result(&self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            tier: self.eligibility,
        }
    }
}

/// Runs a single check: classify, fetch one side, score, estimate.
///
/// Only one side is ever resolved. An address gets an empty social profile
/// and a fid gets an empty on-chain summary; nothing links the two.
pub struct EligibilityChecker {
    transactions: TransactionFetcher,
    social: SocialProfileFetcher,
}

impl EligibilityChecker {
    pub fn new(transactions: TransactionFetcher, social: SocialProfileFetcher) -> Self {
        Self { transactions, social }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            TransactionFetcher::from_settings(&settings.chain)?,
            SocialProfileFetcher::from_settings(&settings.social)?,
        ))
    }

    pub async fn check(&self, input: &str) -> Result<EligibilityReport> {
        self.check_at(input, Utc::now()).await
    }

    pub async fn check_at(&self, input: &str, now: DateTime<Utc>) -> Result<EligibilityReport> {
        let classified = classify(input)?;
        debug!("Classified input {} as {:?}", input, classified);

        let (onchain, farcaster) = match classified {
            CheckInput::Address(address) => (
                self.transactions.fetch_at(&address, now).await,
                SocialProfileSummary::empty(),
            ),
            CheckInput::Fid(fid) => (
                OnChainActivitySummary::empty(),
                self.social.fetch_at(fid, now).await?,
            ),
        };

        let report = EligibilityReport::assemble(onchain, farcaster, now);
        info!(
            "Checked {}: score {} ({}){}",
            input,
            report.score,
            report.eligibility.as_str(),
            if report.onchain.is_estimated() { ", estimated on-chain data" } else { "" }
        );

        Ok(report)
    }
}
