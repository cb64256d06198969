//! Tier rule evaluation for the Redemption Points Engine.
//!
//! This module contains the immutable [`RuleSet`], the pure evaluation
//! functions that map an order total to a points award, rule-set
//! validation for administrators, and the [`RuleEngine`] that pairs a rule
//! set with its configured [`TierPolicy`].

mod evaluate;
mod policy;
mod rule_engine;
mod rule_set;
mod validate;

pub use evaluate::{evaluate, evaluate_amount, evaluate_with_policy};
pub use policy::TierPolicy;
pub use rule_engine::RuleEngine;
pub use rule_set::RuleSet;
pub use validate::{has_errors, validate_rule_set};
