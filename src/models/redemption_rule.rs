//! Redemption rule model.
//!
//! A redemption rule is one tier of the loyalty table: orders at or above
//! `min_order_value` earn `redeem_points` bonus points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tier in the redemption rule set.
///
/// Field names serialize in camelCase to match the storefront backend's
/// rule records; snake_case aliases are accepted on input.
///
/// `redeem_points` is signed so that a misconfigured negative award can be
/// represented and reported by validation rather than rejected at parse time.
///
/// # Example
///
/// ```
/// use redeem_engine::models::RedemptionRule;
/// use rust_decimal::Decimal;
///
/// let rule = RedemptionRule::new("Small Order Bonus", Decimal::from(50), 10);
/// assert!(rule.is_active);
/// assert!(rule.is_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRule {
    /// Short human label, expected to be unique among active rules.
    pub name: String,
    /// Free text shown to administrators and customers.
    #[serde(default)]
    pub description: String,
    /// The inclusive order total at which this tier starts to apply.
    #[serde(alias = "min_order_value")]
    pub min_order_value: Decimal,
    /// Points awarded when this tier is selected.
    #[serde(alias = "redeem_points")]
    pub redeem_points: i64,
    /// Inactive rules are never selected.
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl RedemptionRule {
    /// Creates an active rule with an empty description.
    pub fn new(name: impl Into<String>, min_order_value: Decimal, redeem_points: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            min_order_value,
            redeem_points,
            is_active: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the rule inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns true if the rule can ever be selected during evaluation.
    ///
    /// A rule is eligible when it is active and neither its threshold nor
    /// its award is negative.
    pub fn is_eligible(&self) -> bool {
        self.is_active && self.min_order_value >= Decimal::ZERO && self.redeem_points >= 0
    }

    /// Returns true if an order of `order_total` meets this rule's threshold.
    pub fn qualifies(&self, order_total: Decimal) -> bool {
        self.is_eligible() && self.min_order_value <= order_total
    }

    /// Points this rule awards, clamped to zero.
    pub fn points(&self) -> u64 {
        u64::try_from(self.redeem_points).unwrap_or(0)
    }
}
