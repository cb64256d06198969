//! Configuration loading for the Redemption Points Engine.
//!
//! A loyalty program is configured as a directory of YAML files holding the
//! program metadata, the tier selection policy and the redemption rules.
//! Rules can also come from any other [`RuleSource`], such as the built-in
//! storefront defaults.
//!
//! # Example
//!
//! ```no_run
//! use redeem_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/grocery").unwrap();
//! println!("Loaded program: {}", config.metadata().name);
//! ```

mod loader;
mod source;
mod types;

pub use loader::ConfigLoader;
pub use source::{RuleSource, StaticRuleSource, YamlRuleSource, default_rules};
pub use types::{ProgramConfig, ProgramFile, ProgramMetadata, RulesFile};
