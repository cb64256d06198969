//! Configuration types for the loyalty program.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::engine::{RuleEngine, RuleSet, TierPolicy};
use crate::models::RedemptionRule;

/// Metadata about the loyalty program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    /// Short identifier for the program (e.g., "grocery-rewards").
    pub code: String,
    /// The human-readable name of the program.
    pub name: String,
    /// The version or effective date of the rule table.
    pub version: String,
    /// The currency order totals are expressed in. Informational only.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Structure of `program.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramFile {
    /// Program metadata.
    pub program: ProgramMetadata,
    /// Tier selection policy; defaults to the best single tier.
    #[serde(default)]
    pub policy: TierPolicy,
}

/// Structure of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// The redemption rules, in any order.
    pub rules: Vec<RedemptionRule>,
}

/// The complete, immutable program configuration.
///
/// Built once at startup; the rule set is sorted by threshold and shared
/// by every evaluation.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    metadata: ProgramMetadata,
    engine: RuleEngine,
}

impl ProgramConfig {
    /// Creates a new ProgramConfig from its component parts.
    pub fn new(metadata: ProgramMetadata, policy: TierPolicy, rules: Vec<RedemptionRule>) -> Self {
        Self {
            metadata,
            engine: RuleEngine::new(RuleSet::new(rules), policy),
        }
    }

    /// Returns the program metadata.
    pub fn metadata(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the configured tier policy.
    pub fn policy(&self) -> TierPolicy {
        self.engine.policy()
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    /// Returns the engine for this program.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_program_file_policy_defaults_to_highest_tier() {
        let yaml = "program:\n  code: p\n  name: P\n  version: '1'\n";
        let file: ProgramFile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(file.policy, TierPolicy::HighestTier);
        assert_eq!(file.program.currency, "USD");
    }

    #[test]
    fn test_program_file_reads_cumulative_policy() {
        let yaml = "program:\n  code: p\n  name: P\n  version: '1'\npolicy: cumulative\n";
        let file: ProgramFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.policy, TierPolicy::Cumulative);
    }

    #[test]
    fn test_rules_file_parses_decimal_thresholds() {
        let yaml = r#"
rules:
  - name: Small Order Bonus
    minOrderValue: 49.5
    redeemPoints: 10
"#;
        let file: RulesFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.rules[0].min_order_value, Decimal::new(495, 1));
        assert!(file.rules[0].is_active);
    }

    #[test]
    fn test_program_config_sorts_rules() {
        let metadata = ProgramMetadata {
            code: "p".to_string(),
            name: "P".to_string(),
            version: "1".to_string(),
            currency: "USD".to_string(),
        };
        let config = ProgramConfig::new(
            metadata,
            TierPolicy::Cumulative,
            vec![
                RedemptionRule::new("B", Decimal::from(100), 25),
                RedemptionRule::new("A", Decimal::from(50), 10),
            ],
        );

        assert_eq!(config.rules().rules()[0].name, "A");
        assert_eq!(config.policy(), TierPolicy::Cumulative);
    }
}
