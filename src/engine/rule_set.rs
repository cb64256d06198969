//! Immutable, threshold-ordered rule set.

use rust_decimal::Decimal;

use crate::models::RedemptionRule;

/// An immutable collection of redemption rules ordered by threshold.
///
/// Rules are sorted by `min_order_value` ascending on construction, so
/// evaluation never depends on declaration order. Ties are ordered by
/// `redeem_points` ascending and then by declaration order, which makes the
/// last rule at any threshold the richest one.
///
/// Eligible rules (active, with non-negative threshold and points) are kept
/// in a separate index so evaluation is a binary search for the floor of
/// the order total.
///
/// # Example
///
/// ```
/// use redeem_engine::engine::RuleSet;
/// use redeem_engine::models::RedemptionRule;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::new(vec![
///     RedemptionRule::new("Medium Order Bonus", Decimal::from(100), 25),
///     RedemptionRule::new("Small Order Bonus", Decimal::from(50), 10),
/// ]);
/// assert_eq!(rules.rules()[0].name, "Small Order Bonus");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RedemptionRule>,
    eligible: Vec<RedemptionRule>,
}

impl RuleSet {
    /// Builds a rule set from rules in any order.
    pub fn new(rules: impl IntoIterator<Item = RedemptionRule>) -> Self {
        let mut rules: Vec<RedemptionRule> = rules.into_iter().collect();
        rules.sort_by(|a, b| {
            a.min_order_value
                .cmp(&b.min_order_value)
                .then(a.redeem_points.cmp(&b.redeem_points))
        });

        let eligible = rules.iter().filter(|r| r.is_eligible()).cloned().collect();

        Self { rules, eligible }
    }

    /// All rules, including inactive and malformed ones, in threshold order.
    pub fn rules(&self) -> &[RedemptionRule] {
        &self.rules
    }

    /// Rules that can be selected during evaluation, in threshold order.
    pub fn eligible(&self) -> &[RedemptionRule] {
        &self.eligible
    }

    /// Eligible rules whose threshold is at or below `order_total`.
    ///
    /// The last element, if any, is the best qualifying tier.
    pub fn qualifying(&self, order_total: Decimal) -> &[RedemptionRule] {
        let end = self
            .eligible
            .partition_point(|r| r.min_order_value <= order_total);
        &self.eligible[..end]
    }

    /// The lowest eligible threshold, if any rule is eligible.
    pub fn lowest_threshold(&self) -> Option<Decimal> {
        self.eligible.first().map(|r| r.min_order_value)
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<RedemptionRule>> for RuleSet {
    fn from(rules: Vec<RedemptionRule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<RedemptionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RedemptionRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}
