//! Compiled, shareable regular expressions

use crate::error::{AclError, AclResult};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::Arc;

/// Upper bound on the compiled program size of a configured pattern
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// An immutable compiled pattern
///
/// Cloning shares the compiled program. `regex::Regex` keeps its scratch
/// space in an internal pool, so concurrent `is_match` calls from many
/// threads need no external locking.
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Arc<Regex>,
}

impl CompiledPattern {
    /// Compile `source` verbatim
    ///
    /// No anchors are added: `foo` matches any string containing `foo`.
    pub fn new(source: impl Into<String>) -> AclResult<Self> {
        let source = source.into();
        let regex = compile(&source, &source)?;
        Ok(Self {
            source,
            regex: Arc::new(regex),
        })
    }

    /// Compile `source` so that it must match the whole input
    ///
    /// The expression is wrapped in `^(?:...)$`; `source()` still returns
    /// the text as configured.
    pub fn anchored(source: impl Into<String>) -> AclResult<Self> {
        let source = source.into();
        let regex = compile(&source, &format!("^(?:{})$", source))?;
        Ok(Self {
            source,
            regex: Arc::new(regex),
        })
    }

    /// Test the pattern against `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// The pattern text as it was configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The expression actually compiled
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn compile(source: &str, expression: &str) -> AclResult<Regex> {
    RegexBuilder::new(expression)
        .size_limit(DEFAULT_SIZE_LIMIT)
        .build()
        .map_err(|e| AclError::invalid_pattern(source, e.to_string()))
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CompiledPattern {}
