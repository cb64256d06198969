//! Property tests for tier evaluation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use redeem_engine::engine::{RuleSet, evaluate, validate_rule_set};
use redeem_engine::models::RedemptionRule;

/// Order totals in cents, up to $20,000.
fn order_total() -> impl Strategy<Value = Decimal> {
    (0i64..2_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Arbitrary rules, including inactive and malformed ones.
fn any_rule() -> impl Strategy<Value = RedemptionRule> {
    (-5_000i64..150_000, -50i64..500, any::<bool>()).prop_map(|(cents, points, active)| {
        let rule = RedemptionRule::new(
            format!("Tier {} {}", cents, points),
            Decimal::new(cents, 2),
            points,
        );
        if active { rule } else { rule.inactive() }
    })
}

/// Well-formed tier tables: distinct ascending thresholds, non-decreasing points.
fn well_formed_rules() -> impl Strategy<Value = Vec<RedemptionRule>> {
    prop::collection::vec((1i64..50_000, 0i64..100), 0..10).prop_map(|steps| {
        let mut threshold = 0i64;
        let mut points = 0i64;
        steps
            .into_iter()
            .enumerate()
            .map(|(i, (gap, bump))| {
                threshold += gap;
                points += bump;
                RedemptionRule::new(format!("Tier {}", i), Decimal::new(threshold, 2), points)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn evaluation_is_total_over_any_rule_set(
        rules in prop::collection::vec(any_rule(), 0..12),
        total in order_total(),
    ) {
        let result = evaluate(total, &RuleSet::new(rules));
        prop_assert!(result.is_ok());
    }

    #[test]
    fn applied_rule_is_active_and_qualifying(
        rules in prop::collection::vec(any_rule(), 0..12),
        total in order_total(),
    ) {
        let result = evaluate(total, &RuleSet::new(rules)).unwrap();
        if let Some(rule) = &result.applied_rule {
            prop_assert!(rule.is_active);
            prop_assert!(rule.min_order_value >= Decimal::ZERO);
            prop_assert!(rule.min_order_value <= total);
            prop_assert_eq!(result.points_awarded, rule.redeem_points as u64);
        } else {
            prop_assert_eq!(result.points_awarded, 0);
        }
    }

    #[test]
    fn applied_rule_is_the_highest_qualifying_threshold(
        rules in prop::collection::vec(any_rule(), 0..12),
        total in order_total(),
    ) {
        let set = RuleSet::new(rules.clone());
        let result = evaluate(total, &set).unwrap();

        let best = rules
            .iter()
            .filter(|r| r.qualifies(total))
            .map(|r| r.min_order_value)
            .max();
        prop_assert_eq!(result.applied_rule.map(|r| r.min_order_value), best);
    }

    #[test]
    fn evaluation_is_idempotent(
        rules in prop::collection::vec(any_rule(), 0..12),
        total in order_total(),
    ) {
        let set = RuleSet::new(rules);
        prop_assert_eq!(evaluate(total, &set).unwrap(), evaluate(total, &set).unwrap());
    }

    #[test]
    fn declaration_order_does_not_matter(
        rules in well_formed_rules(),
        total in order_total(),
    ) {
        let mut reversed = rules.clone();
        reversed.reverse();

        prop_assert_eq!(
            evaluate(total, &RuleSet::new(rules)).unwrap(),
            evaluate(total, &RuleSet::new(reversed)).unwrap()
        );
    }

    #[test]
    fn validated_rules_award_monotonically(
        rules in well_formed_rules(),
        a in order_total(),
        b in order_total(),
    ) {
        let set = RuleSet::new(rules);
        prop_assert!(validate_rule_set(&set).is_empty());

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_points = evaluate(low, &set).unwrap().points_awarded;
        let high_points = evaluate(high, &set).unwrap().points_awarded;
        prop_assert!(low_points <= high_points);
    }

    #[test]
    fn inactive_rules_are_never_selected(
        rules in well_formed_rules(),
        total in order_total(),
    ) {
        let set = RuleSet::new(rules.into_iter().map(RedemptionRule::inactive));
        let result = evaluate(total, &set).unwrap();

        prop_assert_eq!(result.points_awarded, 0);
        prop_assert!(result.applied_rule.is_none());
    }

    #[test]
    fn negative_totals_are_rejected(cents in 1i64..1_000_000) {
        let rules = RuleSet::new(redeem_engine::config::default_rules());
        prop_assert!(evaluate(Decimal::new(-cents, 2), &rules).is_err());
    }
}
