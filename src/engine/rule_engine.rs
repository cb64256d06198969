//! A rule set paired with its selection policy.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{RedemptionResult, ValidationIssue};

use super::evaluate::order_total_from_f64;
use super::{RuleSet, TierPolicy, evaluate_with_policy, validate_rule_set};

/// An immutable, cheaply clonable evaluation engine.
///
/// The rule set is held behind an [`Arc`] so a loaded configuration can be
/// shared across request handlers and threads without copying.
///
/// # Example
///
/// ```
/// use redeem_engine::config::default_rules;
/// use redeem_engine::engine::{RuleEngine, RuleSet, TierPolicy};
/// use rust_decimal::Decimal;
///
/// let engine = RuleEngine::new(RuleSet::new(default_rules()), TierPolicy::HighestTier);
/// let result = engine.evaluate(Decimal::from(1500)).unwrap();
/// assert_eq!(result.points_awarded, 300);
/// ```
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Arc<RuleSet>,
    policy: TierPolicy,
}

impl RuleEngine {
    /// Creates an engine over `rules` using `policy`.
    pub fn new(rules: RuleSet, policy: TierPolicy) -> Self {
        Self {
            rules: Arc::new(rules),
            policy,
        }
    }

    /// Returns the rule set this engine evaluates against.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the configured policy.
    pub fn policy(&self) -> TierPolicy {
        self.policy
    }

    /// Evaluates an order total under the configured policy.
    pub fn evaluate(&self, order_total: Decimal) -> EngineResult<RedemptionResult> {
        evaluate_with_policy(order_total, &self.rules, self.policy)
    }

    /// Evaluates a floating-point order total under the configured policy.
    pub fn evaluate_amount(&self, order_total: f64) -> EngineResult<RedemptionResult> {
        self.evaluate(order_total_from_f64(order_total)?)
    }

    /// Validates the engine's rule set.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_rule_set(&self.rules)
    }
}
