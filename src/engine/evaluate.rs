//! Order total evaluation.
//!
//! This module maps an order total to a points award. Evaluation is a pure
//! function of its inputs: it never fails on rule-set content, only on a
//! malformed order total.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{RedemptionResult, RedemptionRule};

use super::{RuleSet, TierPolicy};

/// Evaluates an order total against a rule set using the best single tier.
///
/// Among eligible rules whose `min_order_value` is at or below the order
/// total, the rule with the largest threshold is selected. An order below
/// every threshold earns zero points; that is a normal outcome.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `order_total` is negative.
///
/// # Examples
///
/// ```
/// use redeem_engine::config::default_rules;
/// use redeem_engine::engine::{evaluate, RuleSet};
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::new(default_rules());
///
/// let result = evaluate(Decimal::from(250), &rules).unwrap();
/// assert_eq!(result.points_awarded, 60);
/// assert_eq!(result.applied_rule_name(), Some("Large Order Bonus"));
///
/// assert!(evaluate(Decimal::from(-5), &rules).is_err());
/// ```
pub fn evaluate(order_total: Decimal, rules: &RuleSet) -> EngineResult<RedemptionResult> {
    evaluate_with_policy(order_total, rules, TierPolicy::HighestTier)
}

/// Evaluates a floating-point order total.
///
/// Rejects NaN, infinite and negative amounts, then converts to [`Decimal`]
/// and delegates to [`evaluate`]. Finite amounts too large for [`Decimal`]
/// are clamped to [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use redeem_engine::config::default_rules;
/// use redeem_engine::engine::{evaluate_amount, RuleSet};
///
/// let rules = RuleSet::new(default_rules());
/// assert_eq!(evaluate_amount(49.99, &rules).unwrap().points_awarded, 0);
/// assert!(evaluate_amount(f64::NAN, &rules).is_err());
/// ```
pub fn evaluate_amount(order_total: f64, rules: &RuleSet) -> EngineResult<RedemptionResult> {
    evaluate(order_total_from_f64(order_total)?, rules)
}

/// Converts a floating-point order total into a [`Decimal`] amount.
pub(crate) fn order_total_from_f64(order_total: f64) -> EngineResult<Decimal> {
    if order_total.is_nan() {
        return Err(EngineError::invalid_order_total("must be a number (got NaN)"));
    }
    if order_total.is_infinite() {
        return Err(EngineError::invalid_order_total(format!(
            "must be finite (got {})",
            order_total
        )));
    }
    if order_total < 0.0 {
        return Err(EngineError::invalid_order_total(format!(
            "must not be negative (got {})",
            order_total
        )));
    }

    // abs() folds -0.0 into 0; totals beyond Decimal's range clear every tier
    Ok(Decimal::from_f64(order_total.abs()).unwrap_or(Decimal::MAX))
}

/// Evaluates an order total under an explicit [`TierPolicy`].
///
/// [`TierPolicy::HighestTier`] behaves exactly like [`evaluate`].
/// [`TierPolicy::Cumulative`] awards the sum of every qualifying tier and
/// reports the highest qualifying tier as the applied rule.
pub fn evaluate_with_policy(
    order_total: Decimal,
    rules: &RuleSet,
    policy: TierPolicy,
) -> EngineResult<RedemptionResult> {
    if order_total < Decimal::ZERO {
        return Err(EngineError::invalid_order_total(format!(
            "must not be negative (got {})",
            order_total.normalize()
        )));
    }

    let qualifying = rules.qualifying(order_total);

    let Some(best) = qualifying.last() else {
        let explanation = match rules.lowest_threshold() {
            Some(lowest) => format!(
                "${} is below the lowest active tier (${}); no points awarded",
                order_total.normalize(),
                lowest.normalize()
            ),
            None => format!(
                "No active redemption rules; ${} earns no points",
                order_total.normalize()
            ),
        };
        debug!(order_total = %order_total, "No redemption tier qualifies");
        return Ok(RedemptionResult::none(explanation));
    };

    let (points_awarded, explanation) = match policy {
        TierPolicy::HighestTier => (
            best.points(),
            format!(
                "${} qualifies for '{}' (min ${}): {} points",
                order_total.normalize(),
                best.name,
                best.min_order_value.normalize(),
                best.points()
            ),
        ),
        TierPolicy::Cumulative => {
            let total_points = qualifying
                .iter()
                .map(RedemptionRule::points)
                .fold(0u64, u64::saturating_add);
            (
                total_points,
                format!(
                    "${} qualifies for {} tier(s) up to '{}' (min ${}): {} points",
                    order_total.normalize(),
                    qualifying.len(),
                    best.name,
                    best.min_order_value.normalize(),
                    total_points
                ),
            )
        }
    };

    debug!(
        order_total = %order_total,
        rule = %best.name,
        points = points_awarded,
        policy = %policy,
        "Redemption tier selected"
    );

    Ok(RedemptionResult {
        points_awarded,
        applied_rule: Some(best.clone()),
        explanation,
    })
}
