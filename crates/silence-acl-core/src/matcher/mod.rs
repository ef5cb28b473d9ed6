//! Matcher rule engine
//!
//! A [`RequiredMatcher`] is an administrator-defined rule, a
//! [`CandidateMatcher`] is what a request presents. Matching is a pure
//! predicate over the two:
//!
//! - name: pattern match if the rule carries a pattern, literal equality otherwise
//! - value: same as name
//! - `is_regex`: must be equal on both sides
//! - `is_equal`: must be equal on both sides
//!
//! All four checks must pass. The flag checks are exact equality, not
//! implication: a rule with `is_regex = true` never matches a candidate
//! with `is_regex = false`, whether or not the rule itself uses patterns.

mod candidate;
mod criterion;
mod pattern;
mod required;

pub use candidate::CandidateMatcher;
pub use criterion::Criterion;
pub use pattern::{CompiledPattern, DEFAULT_SIZE_LIMIT};
pub use required::{RequiredMatcher, RequiredMatcherBuilder};
