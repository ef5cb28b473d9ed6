//! Configuration loading
//!
//! Raw configuration ([`AclConfig`]) is deserialized from YAML, TOML or
//! JSON, validated, and compiled into a [`LoadedAcl`]. Every pattern is
//! compiled anchored at load time; the first error fails the whole load.

mod compile;
mod file_loader;
mod model;
mod validation;

pub use compile::{LoadedAcl, compile};
pub use file_loader::{ConfigFormat, load_from_file, load_from_str};
pub use model::{AclConfig, GroupConfig, MatcherConfig, MatchersConfig, RuleConfig, ScopeConfig};
pub use validation::ConfigValidator;
