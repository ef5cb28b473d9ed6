//! Silence ACL core library
//!
//! This crate decides whether a silence matcher presented by a request is
//! permitted by administrator-defined rules. It provides:
//! - The matcher rule engine ([`RequiredMatcher`] / [`CandidateMatcher`])
//! - Subject policies, an OR reduction over a subject's required matchers
//! - Ordered silence ACL rules (allow, block, requireMatcher)
//! - Configuration loading that compiles every pattern up front

pub mod acl;
pub mod config;
pub mod error;
pub mod matcher;
pub mod policy;

// Re-export commonly used types
pub use acl::{AclAction, AclDecision, AclRule, AclRuleSet, AclScope, GroupDirectory, Silence};
pub use config::{AclConfig, ConfigFormat, LoadedAcl, load_from_file, load_from_str};
pub use error::{AclError, AclResult};
pub use matcher::{
    CandidateMatcher, CompiledPattern, Criterion, RequiredMatcher, RequiredMatcherBuilder,
};
pub use policy::{SubjectPolicy, any_match};
