//! Subject policies
//!
//! A subject (user or group) owns a set of required matchers. A candidate
//! is permitted for a subject if any one of them matches.

use crate::matcher::{CandidateMatcher, RequiredMatcher};
use std::collections::HashMap;
use tracing::debug;

/// Logical OR of [`RequiredMatcher::is_match`] over `rules`
///
/// An empty rule set matches nothing.
pub fn any_match<'a, I>(rules: I, candidate: &CandidateMatcher) -> bool
where
    I: IntoIterator<Item = &'a RequiredMatcher>,
{
    rules.into_iter().any(|rule| rule.is_match(candidate))
}

/// Required matchers keyed by subject
#[derive(Debug, Clone, Default)]
pub struct SubjectPolicy {
    subjects: HashMap<String, Vec<RequiredMatcher>>,
}

impl SubjectPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rules for a subject
    pub fn insert(&mut self, subject: impl Into<String>, rules: Vec<RequiredMatcher>) {
        self.subjects.entry(subject.into()).or_default().extend(rules);
    }

    /// Rules owned by `subject`
    pub fn rules(&self, subject: &str) -> &[RequiredMatcher] {
        self.subjects.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any rule of `subject` matches `candidate`
    ///
    /// Unknown subjects are never permitted.
    pub fn is_permitted(&self, subject: &str, candidate: &CandidateMatcher) -> bool {
        let permitted = any_match(self.rules(subject), candidate);
        debug!(subject, candidate = %candidate, permitted, "evaluated subject policy");
        permitted
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl FromIterator<(String, Vec<RequiredMatcher>)> for SubjectPolicy {
    fn from_iter<T: IntoIterator<Item = (String, Vec<RequiredMatcher>)>>(iter: T) -> Self {
        let mut policy = Self::new();
        for (subject, rules) in iter {
            policy.insert(subject, rules);
        }
        policy
    }
}
