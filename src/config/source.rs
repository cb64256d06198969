//! Rule sources.
//!
//! The engine never reads rules itself; a [`RuleSource`] hands it an owned
//! snapshot that is then frozen into a [`crate::engine::RuleSet`].

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::RedemptionRule;

use super::loader::load_yaml;
use super::types::RulesFile;

/// Something that can produce a snapshot of redemption rules.
pub trait RuleSource {
    /// Loads the current rules.
    fn load_rules(&self) -> EngineResult<Vec<RedemptionRule>>;

    /// A short description of where the rules come from, for logging.
    fn describe(&self) -> String;
}

/// Reads rules from a `rules.yaml` file.
#[derive(Debug, Clone)]
pub struct YamlRuleSource {
    path: PathBuf,
}

impl YamlRuleSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for YamlRuleSource {
    fn load_rules(&self) -> EngineResult<Vec<RedemptionRule>> {
        load_yaml::<RulesFile>(&self.path).map(|file| file.rules)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a fixed, in-memory list of rules.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSource {
    rules: Vec<RedemptionRule>,
}

impl StaticRuleSource {
    /// Creates a source serving `rules`.
    pub fn new(rules: Vec<RedemptionRule>) -> Self {
        Self { rules }
    }

    /// The storefront's built-in tier table.
    pub fn defaults() -> Self {
        Self::new(default_rules())
    }
}

impl RuleSource for StaticRuleSource {
    fn load_rules(&self) -> EngineResult<Vec<RedemptionRule>> {
        Ok(self.rules.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} rules)", self.rules.len())
    }
}

/// The storefront's built-in tier table: five active tiers from $50 to $1000.
pub fn default_rules() -> Vec<RedemptionRule> {
    [
        ("Small Order Bonus", 50i64, 10),
        ("Medium Order Bonus", 100, 25),
        ("Large Order Bonus", 200, 60),
        ("Premium Order Bonus", 500, 150),
        ("VIP Order Bonus", 1000, 300),
    ]
    .into_iter()
    .map(|(name, min, points)| {
        RedemptionRule::new(name, Decimal::from(min), points)
            .with_description(format!("Earn points for orders over ${}", min))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_default_rules_are_five_active_tiers() {
        let rules = default_rules();

        assert_eq!(rules.len(), 5);
        assert!(rules.iter().all(|r| r.is_active));
        assert_eq!(rules[0].name, "Small Order Bonus");
        assert_eq!(rules[4].redeem_points, 300);
        assert_eq!(rules[2].description, "Earn points for orders over $200");
    }

    #[test]
    fn test_static_source_returns_snapshot() {
        let source = StaticRuleSource::defaults();

        assert_eq!(source.load_rules().unwrap(), default_rules());
        assert_eq!(source.describe(), "static (5 rules)");
    }

    #[test]
    fn test_yaml_source_reads_rules_file() {
        let source = YamlRuleSource::new("./config/grocery/rules.yaml");
        let rules = source.load_rules().unwrap();

        assert_eq!(rules, default_rules());
    }

    #[test]
    fn test_yaml_source_missing_file() {
        let source = YamlRuleSource::new("/nonexistent/rules.yaml");

        match source.load_rules() {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
