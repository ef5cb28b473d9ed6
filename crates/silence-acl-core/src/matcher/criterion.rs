//! Per-field match criterion

use super::pattern::CompiledPattern;
use std::fmt;

/// How one field (name or value) of a candidate is tested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Exact, case-sensitive string equality
    Literal(String),
    /// Regular expression match
    Pattern(CompiledPattern),
}

impl Criterion {
    /// Test a candidate field
    pub fn matches(&self, field: &str) -> bool {
        match self {
            Self::Literal(literal) => literal == field,
            Self::Pattern(pattern) => pattern.is_match(field),
        }
    }

    /// Whether this criterion uses a pattern
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl From<&str> for Criterion {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl From<String> for Criterion {
    fn from(literal: String) -> Self {
        Self::Literal(literal)
    }
}

impl From<CompiledPattern> for Criterion {
    fn from(pattern: CompiledPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{:?}", literal),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_exact() {
        let criterion = Criterion::from("foo");
        assert!(criterion.matches("foo"));
        assert!(!criterion.matches("Foo"));
        assert!(!criterion.matches("foobar"));
        assert!(!criterion.matches(""));
    }

    #[test]
    fn test_empty_literal_matches_only_empty() {
        let criterion = Criterion::default();
        assert!(criterion.matches(""));
        assert!(!criterion.matches("anything"));
    }

    #[test]
    fn test_pattern() {
        let criterion = Criterion::from(CompiledPattern::new("^ba[rz]$").unwrap());
        assert!(criterion.is_pattern());
        assert!(criterion.matches("bar"));
        assert!(criterion.matches("baz"));
        assert!(!criterion.matches("bat"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Criterion::from("foo").to_string(), "\"foo\"");
        let pattern = CompiledPattern::anchored(".+").unwrap();
        assert_eq!(Criterion::from(pattern).to_string(), "/.+/");
    }
}
