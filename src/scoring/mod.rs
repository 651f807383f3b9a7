pub mod algorithm;
pub mod estimate;
pub mod input;
pub mod checker;

pub use algorithm::{calculate_breakdown, calculate_score, ScoreBreakdown};
pub use estimate::estimate_airdrop;
pub use input::{classify, CheckInput};
pub use checker::{EligibilityChecker, EligibilityReport};
