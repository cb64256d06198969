//! Tier selection policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How qualifying tiers are turned into a points award.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierPolicy {
    /// Award only the best qualifying tier.
    #[default]
    HighestTier,
    /// Award the sum of every qualifying tier.
    Cumulative,
}

impl fmt::Display for TierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierPolicy::HighestTier => write!(f, "highest_tier"),
            TierPolicy::Cumulative => write!(f, "cumulative"),
        }
    }
}
