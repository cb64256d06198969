//! Rule-set validation.
//!
//! Validation never fails: every structural problem is returned as a
//! [`ValidationIssue`] so administrators can review it before saving.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{IssueCode, RedemptionRule, ValidationIssue};

use super::RuleSet;

/// Checks a rule set for structural problems.
///
/// Errors:
/// - a rule with a negative `min_order_value`
/// - a rule with negative `redeem_points`
/// - two active rules sharing a `min_order_value`
///
/// Warnings:
/// - a higher active tier awarding fewer points than a lower active tier
/// - two active rules sharing a name
///
/// Returns an empty list when the rule set is well-formed.
///
/// # Examples
///
/// ```
/// use redeem_engine::config::default_rules;
/// use redeem_engine::engine::{validate_rule_set, RuleSet};
///
/// assert!(validate_rule_set(&RuleSet::new(default_rules())).is_empty());
/// ```
pub fn validate_rule_set(rules: &RuleSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for rule in rules.rules() {
        if rule.min_order_value < Decimal::ZERO {
            issues.push(ValidationIssue::new(
                IssueCode::NegativeMinOrderValue,
                &rule.name,
                format!(
                    "minimum order value ${} is negative; the rule can never apply",
                    rule.min_order_value.normalize()
                ),
            ));
        }
        if rule.redeem_points < 0 {
            issues.push(ValidationIssue::new(
                IssueCode::NegativeRedeemPoints,
                &rule.name,
                format!(
                    "awards {} points; awards must not be negative",
                    rule.redeem_points
                ),
            ));
        }
    }

    let active: Vec<&RedemptionRule> = rules.rules().iter().filter(|r| r.is_active).collect();

    for pair in active.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if lower.min_order_value == upper.min_order_value {
            issues.push(ValidationIssue::new(
                IssueCode::DuplicateThreshold,
                &upper.name,
                format!(
                    "shares minimum order value ${} with '{}'",
                    upper.min_order_value.normalize(),
                    lower.name
                ),
            ));
        }
    }

    // Running maximum over eligible tiers; a later tier below it is a drop.
    let mut richest: Option<&RedemptionRule> = None;
    for rule in active.iter().copied().filter(|r| r.is_eligible()) {
        match richest {
            Some(best)
                if rule.min_order_value > best.min_order_value
                    && rule.redeem_points < best.redeem_points =>
            {
                issues.push(ValidationIssue::new(
                    IssueCode::NonMonotonicPoints,
                    &rule.name,
                    format!(
                        "awards {} points at ${} but '{}' awards {} points at ${}",
                        rule.redeem_points,
                        rule.min_order_value.normalize(),
                        best.name,
                        best.redeem_points,
                        best.min_order_value.normalize()
                    ),
                ));
            }
            _ => richest = Some(rule),
        }
    }

    let mut seen = HashSet::new();
    for rule in &active {
        if !seen.insert(rule.name.as_str()) {
            issues.push(ValidationIssue::new(
                IssueCode::DuplicateName,
                &rule.name,
                format!("name '{}' is used by more than one active rule", rule.name),
            ));
        }
    }

    issues
}

/// Returns true if any issue is error-severity.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_error)
}
