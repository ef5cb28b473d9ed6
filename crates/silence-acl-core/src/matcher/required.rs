//! Administrator-defined required matchers

use super::candidate::CandidateMatcher;
use super::criterion::Criterion;
use super::pattern::CompiledPattern;
use std::fmt;
use tracing::warn;

/// An authorization rule a candidate matcher is tested against
///
/// Immutable once built. Patterns are compiled before construction, so
/// [`RequiredMatcher::is_match`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredMatcher {
    name: Criterion,
    value: Criterion,
    is_regex: bool,
    is_equal: bool,
}

impl RequiredMatcher {
    /// Create a required matcher from already chosen criteria
    pub fn new(name: Criterion, value: Criterion, is_regex: bool, is_equal: bool) -> Self {
        Self {
            name,
            value,
            is_regex,
            is_equal,
        }
    }

    /// Start building a required matcher
    pub fn builder() -> RequiredMatcherBuilder {
        RequiredMatcherBuilder::default()
    }

    /// Decide whether `candidate` satisfies this rule
    pub fn is_match(&self, candidate: &CandidateMatcher) -> bool {
        self.name.matches(&candidate.name)
            && self.value.matches(&candidate.value)
            && self.is_regex == candidate.is_regex
            && self.is_equal == candidate.is_equal
    }

    pub fn name(&self) -> &Criterion {
        &self.name
    }

    pub fn value(&self) -> &Criterion {
        &self.value
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    pub fn is_equal(&self) -> bool {
        self.is_equal
    }
}

impl fmt::Display for RequiredMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name: {}, value: {}, isRegex: {}, isEqual: {}}}",
            self.name, self.value, self.is_regex, self.is_equal
        )
    }
}

/// Builder for [`RequiredMatcher`]
///
/// Mirrors the configuration fields: a literal and a pattern may both be
/// given for the same field, in which case the pattern is used and the
/// literal is ignored.
#[derive(Debug, Clone, Default)]
pub struct RequiredMatcherBuilder {
    name: Option<String>,
    name_regex: Option<CompiledPattern>,
    value: Option<String>,
    value_regex: Option<CompiledPattern>,
    is_regex: bool,
    is_equal: bool,
}

impl RequiredMatcherBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name_regex(mut self, pattern: CompiledPattern) -> Self {
        self.name_regex = Some(pattern);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_regex(mut self, pattern: CompiledPattern) -> Self {
        self.value_regex = Some(pattern);
        self
    }

    pub fn is_regex(mut self, is_regex: bool) -> Self {
        self.is_regex = is_regex;
        self
    }

    pub fn is_equal(mut self, is_equal: bool) -> Self {
        self.is_equal = is_equal;
        self
    }

    pub fn build(self) -> RequiredMatcher {
        RequiredMatcher {
            name: choose("name", self.name, self.name_regex),
            value: choose("value", self.value, self.value_regex),
            is_regex: self.is_regex,
            is_equal: self.is_equal,
        }
    }
}

fn choose(dimension: &str, literal: Option<String>, pattern: Option<CompiledPattern>) -> Criterion {
    match (literal, pattern) {
        (Some(literal), Some(pattern)) => {
            if !literal.is_empty() {
                warn!(
                    dimension,
                    literal = %literal,
                    pattern = %pattern,
                    "both literal and pattern set, literal is ignored"
                );
            }
            Criterion::Pattern(pattern)
        }
        (_, Some(pattern)) => Criterion::Pattern(pattern),
        (literal, None) => Criterion::Literal(literal.unwrap_or_default()),
    }
}
