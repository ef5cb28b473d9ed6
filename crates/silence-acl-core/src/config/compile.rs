//! Compile validated configuration into rule sets

use super::model::{AclConfig, MatcherConfig, RuleConfig};
use crate::acl::{AclRule, AclRuleSet, AclScope, GroupDirectory};
use crate::error::AclResult;
use crate::matcher::{CompiledPattern, RequiredMatcher};
use crate::policy::SubjectPolicy;

/// Everything a loaded configuration provides
#[derive(Debug, Clone, Default)]
pub struct LoadedAcl {
    /// Ordered silence ACL rules with their group directory
    pub rules: AclRuleSet,
    /// Required matchers per subject
    pub policy: SubjectPolicy,
}

/// Compile a configuration, failing on the first invalid pattern
pub fn compile(config: &AclConfig) -> AclResult<LoadedAcl> {
    let mut groups = GroupDirectory::new();
    for group in &config.groups {
        groups.insert(group.name.clone(), group.members.iter().cloned());
    }

    let rules = config
        .rules
        .iter()
        .map(compile_rule)
        .collect::<AclResult<Vec<_>>>()?;

    let policy = config
        .subjects
        .iter()
        .map(|(subject, matchers)| {
            compile_matchers(matchers).map(|compiled| (subject.clone(), compiled))
        })
        .collect::<AclResult<SubjectPolicy>>()?;

    Ok(LoadedAcl {
        rules: AclRuleSet::new(rules, groups),
        policy,
    })
}

fn compile_rule(rule: &RuleConfig) -> AclResult<AclRule> {
    let scope = AclScope {
        groups: rule.scope.groups.clone(),
        alertmanagers: rule
            .scope
            .alertmanagers
            .iter()
            .map(CompiledPattern::anchored)
            .collect::<AclResult<Vec<_>>>()?,
        filters: compile_matchers(&rule.scope.filters)?,
    };

    Ok(AclRule::new(rule.action, rule.reason.clone())
        .with_scope(scope)
        .with_required(compile_matchers(&rule.matchers.required)?))
}

fn compile_matchers(matchers: &[MatcherConfig]) -> AclResult<Vec<RequiredMatcher>> {
    matchers.iter().map(compile_matcher).collect()
}

/// Build a [`RequiredMatcher`] from its configured fields
pub(crate) fn compile_matcher(config: &MatcherConfig) -> AclResult<RequiredMatcher> {
    let mut builder = RequiredMatcher::builder()
        .is_regex(config.is_regex)
        .is_equal(config.is_equal);

    if let Some(name) = &config.name {
        builder = builder.name(name.clone());
    }
    if let Some(pattern) = &config.name_re {
        builder = builder.name_regex(CompiledPattern::anchored(pattern.clone())?);
    }
    if let Some(value) = &config.value {
        builder = builder.value(value.clone());
    }
    if let Some(pattern) = &config.value_re {
        builder = builder.value_regex(CompiledPattern::anchored(pattern.clone())?);
    }

    Ok(builder.build())
}
