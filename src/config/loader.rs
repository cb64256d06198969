//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a loyalty
//! program from YAML files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::engine::{RuleEngine, RuleSet, TierPolicy, validate_rule_set};
use crate::error::{EngineError, EngineResult};

use super::source::{RuleSource, YamlRuleSource};
use super::types::{ProgramConfig, ProgramFile, ProgramMetadata};

/// Loads and provides access to a loyalty program configuration.
///
/// # Directory Structure
///
/// ```text
/// config/grocery/
/// ├── program.yaml   # Program metadata and tier policy
/// └── rules.yaml     # Redemption rules
/// ```
///
/// Rules are read once, sorted by threshold and frozen; the loader never
/// reloads them.
///
/// # Example
///
/// ```no_run
/// use redeem_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/grocery")?;
/// let result = loader.engine().evaluate(Decimal::from(250))?;
/// println!("Points: {}", result.points_awarded);
/// # Ok::<(), redeem_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProgramConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `program.yaml` or `rules.yaml` is missing (`ConfigNotFound`)
    /// - either file exists but cannot be read (`ConfigReadError`)
    /// - either file contains invalid YAML or misses a field (`ConfigParseError`)
    ///
    /// A rule set with validation issues still loads; the issues are logged.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let program_file = load_yaml::<ProgramFile>(&path.join("program.yaml"))?;
        let source = YamlRuleSource::new(path.join("rules.yaml"));

        Self::from_source(program_file.program, program_file.policy, &source)
    }

    /// Builds a configuration from any rule source.
    ///
    /// # Example
    ///
    /// ```
    /// use redeem_engine::config::{ConfigLoader, ProgramMetadata, StaticRuleSource};
    /// use redeem_engine::engine::TierPolicy;
    ///
    /// let metadata = ProgramMetadata {
    ///     code: "grocery-rewards".to_string(),
    ///     name: "Grocery Order Rewards".to_string(),
    ///     version: "builtin".to_string(),
    ///     currency: "USD".to_string(),
    /// };
    /// let loader = ConfigLoader::from_source(
    ///     metadata,
    ///     TierPolicy::HighestTier,
    ///     &StaticRuleSource::defaults(),
    /// )?;
    /// assert_eq!(loader.rules().len(), 5);
    /// # Ok::<(), redeem_engine::error::EngineError>(())
    /// ```
    pub fn from_source(
        metadata: ProgramMetadata,
        policy: TierPolicy,
        source: &dyn RuleSource,
    ) -> EngineResult<Self> {
        let rules = source.load_rules()?;
        let config = ProgramConfig::new(metadata, policy, rules);

        let issues = validate_rule_set(config.rules());
        for issue in &issues {
            warn!(
                rule = %issue.rule_name,
                code = ?issue.code,
                severity = ?issue.severity,
                "{}",
                issue.message
            );
        }

        info!(
            program = %config.metadata().code,
            source = %source.describe(),
            rules = config.rules().len(),
            eligible = config.rules().eligible().len(),
            policy = %policy,
            issues = issues.len(),
            "Loaded redemption rules"
        );

        Ok(Self { config })
    }

    /// Returns the underlying program configuration.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn metadata(&self) -> &ProgramMetadata {
        self.config.metadata()
    }

    /// Returns the configured tier policy.
    pub fn policy(&self) -> TierPolicy {
        self.config.policy()
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        self.config.rules()
    }

    /// Returns the engine for the loaded program.
    pub fn engine(&self) -> &RuleEngine {
        self.config.engine()
    }
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EngineError::ConfigNotFound {
            path: path_str.clone(),
        },
        _ => EngineError::ConfigReadError {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
