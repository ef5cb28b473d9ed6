//! Silence ACL data types

use crate::matcher::{CandidateMatcher, CompiledPattern, RequiredMatcher};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A silence being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Silence {
    pub matchers: Vec<CandidateMatcher>,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(default)]
    pub comment: String,
}

impl Silence {
    pub fn new(matchers: Vec<CandidateMatcher>) -> Self {
        Self {
            matchers,
            ..Default::default()
        }
    }

    /// Whether at least one of this silence's matchers satisfies `required`
    pub fn has_match(&self, required: &RequiredMatcher) -> bool {
        self.matchers.iter().any(|m| required.is_match(m))
    }
}

/// What a rule does once its scope applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AclAction {
    Allow,
    Block,
    RequireMatcher,
}

impl fmt::Display for AclAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Block => write!(f, "block"),
            Self::RequireMatcher => write!(f, "requireMatcher"),
        }
    }
}

/// Conditions under which a rule applies
///
/// Every non-empty condition must hold; an empty scope applies to every
/// silence.
#[derive(Debug, Clone, Default)]
pub struct AclScope {
    /// User must belong to at least one of these groups
    pub groups: Vec<String>,
    /// Target alertmanager must match at least one of these patterns
    pub alertmanagers: Vec<CompiledPattern>,
    /// Every filter must match at least one silence matcher
    pub filters: Vec<RequiredMatcher>,
}

/// One ordered silence ACL rule
#[derive(Debug, Clone)]
pub struct AclRule {
    pub action: AclAction,
    pub reason: String,
    pub scope: AclScope,
    /// Only consulted for [`AclAction::RequireMatcher`]
    pub required: Vec<RequiredMatcher>,
}

impl AclRule {
    pub fn new(action: AclAction, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
            scope: AclScope::default(),
            required: Vec::new(),
        }
    }

    pub fn with_scope(mut self, scope: AclScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_required(mut self, required: Vec<RequiredMatcher>) -> Self {
        self.required = required;
        self
    }
}

/// Outcome of evaluating a silence against a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum AclDecision {
    /// `rule` is the index of the allow rule, or `None` when no rule stopped evaluation
    Allowed { rule: Option<usize> },
    Blocked { rule: usize, reason: String },
}

impl AclDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

impl fmt::Display for AclDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed { rule: Some(rule) } => write!(f, "allowed by rule #{}", rule),
            Self::Allowed { rule: None } => write!(f, "allowed"),
            Self::Blocked { rule, reason } => {
                write!(f, "blocked by rule #{}: {}", rule, reason)
            }
        }
    }
}
