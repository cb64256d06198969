//! Evaluation result models for the Redemption Points Engine.
//!
//! This module contains the [`RedemptionResult`] returned by the engine and
//! the audit structures the API attaches to its responses.

use serde::{Deserialize, Serialize};

use super::RedemptionRule;

/// The outcome of evaluating an order total against a rule set.
///
/// A result with no applied rule and zero points is a normal outcome, not
/// an error.
///
/// # Example
///
/// ```
/// use redeem_engine::models::RedemptionResult;
///
/// let result = RedemptionResult::none("$0 is below every active tier");
/// assert_eq!(result.points_awarded, 0);
/// assert!(result.applied_rule.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionResult {
    /// The number of points to credit to the customer.
    pub points_awarded: u64,
    /// The tier that was selected, if any.
    pub applied_rule: Option<RedemptionRule>,
    /// Human-readable explanation of the decision.
    pub explanation: String,
}

impl RedemptionResult {
    /// Creates a zero-point result with no applied rule.
    pub fn none(explanation: impl Into<String>) -> Self {
        Self {
            points_awarded: 0,
            applied_rule: None,
            explanation: explanation.into(),
        }
    }

    /// Returns the name of the applied rule, if any.
    pub fn applied_rule_name(&self) -> Option<&str> {
        self.applied_rule.as_ref().map(|r| r.name.as_str())
    }
}

/// A single step in the audit trace recording an evaluation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Identifier of the engine stage (e.g. "input_validation").
    pub rule_id: String,
    /// Human-readable name of the stage.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for an evaluation served over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of evaluation steps.
    pub steps: Vec<AuditStep>,
    /// Rule-set warnings surfaced alongside the evaluation.
    pub warnings: Vec<super::ValidationIssue>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}
