//! Shared state for the API handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ProgramMetadata};
use crate::engine::{RuleEngine, RuleSet, TierPolicy};

/// The loaded program as seen by request handlers.
///
/// Cloning is cheap: the rule set lives behind the engine's `Arc` and the
/// metadata behind its own, so every handler shares one frozen snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    program: Arc<ProgramMetadata>,
    engine: RuleEngine,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_engine(config.metadata().clone(), config.engine().clone())
    }

    /// Builds the state from an engine that did not come from a config directory.
    pub fn from_engine(program: ProgramMetadata, engine: RuleEngine) -> Self {
        Self {
            program: Arc::new(program),
            engine,
        }
    }

    /// Metadata of the program being served.
    pub fn program(&self) -> &ProgramMetadata {
        &self.program
    }

    /// The program's engine.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// The program's rule set.
    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    /// The program's tier policy.
    pub fn policy(&self) -> TierPolicy {
        self.engine.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_rules;

    fn metadata() -> ProgramMetadata {
        ProgramMetadata {
            code: "static".to_string(),
            name: "Static Program".to_string(),
            version: "1".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_app_state_is_axum_state() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_from_engine_exposes_program_and_policy() {
        let engine = RuleEngine::new(RuleSet::new(default_rules()), TierPolicy::Cumulative);
        let state = AppState::from_engine(metadata(), engine);

        assert_eq!(state.program().code, "static");
        assert_eq!(state.policy(), TierPolicy::Cumulative);
        assert_eq!(state.rules().len(), 5);
    }

    #[test]
    fn test_clones_share_the_rule_set() {
        let state = AppState::new(ConfigLoader::load("./config/grocery").unwrap());
        let clone = state.clone();

        assert!(std::ptr::eq(state.rules(), clone.rules()));
        assert!(std::ptr::eq(state.program(), clone.program()));
    }
}
