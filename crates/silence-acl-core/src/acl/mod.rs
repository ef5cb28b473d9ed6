//! Silence ACL rules
//!
//! Rules are evaluated in order against a silence. A rule whose scope does
//! not apply is skipped; otherwise:
//!
//! - `allow` permits the silence and stops evaluation
//! - `block` rejects the silence and stops evaluation
//! - `requireMatcher` rejects the silence if any required matcher is not
//!   satisfied by one of its matchers, and continues otherwise
//!
//! A silence that no rule stops is allowed.

mod groups;
mod rule_set;
mod types;

pub use groups::GroupDirectory;
pub use rule_set::AclRuleSet;
pub use types::{AclAction, AclDecision, AclRule, AclScope, Silence};
