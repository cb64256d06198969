//! Request types for the Redemption Points Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{RuleSet, TierPolicy};
use crate::models::RedemptionRule;

/// Request body for the `/evaluate` endpoint.
///
/// `order_total` accepts a JSON number or a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The order's monetary total.
    pub order_total: Decimal,
    /// Optional rules to evaluate against instead of the loaded program.
    #[serde(default)]
    pub rules: Option<Vec<RedemptionRule>>,
    /// Optional policy override; defaults to the program's policy.
    #[serde(default)]
    pub policy: Option<TierPolicy>,
}

impl EvaluationRequest {
    /// Creates a request for `order_total` against the loaded program.
    pub fn new(order_total: Decimal) -> Self {
        Self {
            order_total,
            rules: None,
            policy: None,
        }
    }

    /// Takes a snapshot of any override rules as an immutable rule set.
    pub fn override_rules(&self) -> Option<RuleSet> {
        self.rules.as_ref().map(|rules| RuleSet::new(rules.iter().cloned()))
    }
}

/// Request body for the `/rules/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The rules an administrator intends to save.
    pub rules: Vec<RedemptionRule>,
}
