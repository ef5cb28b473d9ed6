//! Configuration validation

use super::model::{AclConfig, MatcherConfig};
use crate::acl::AclAction;
use crate::error::{AclError, AclResult};
use std::collections::HashSet;
use tracing::warn;

/// Structural checks run before any pattern is compiled
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &AclConfig) -> AclResult<()> {
        let groups = Self::validate_groups(config)?;
        Self::validate_rules(config, &groups)?;
        Self::validate_subjects(config)?;
        Ok(())
    }

    fn validate_groups(config: &AclConfig) -> AclResult<HashSet<&str>> {
        let mut names = HashSet::new();
        for (index, group) in config.groups.iter().enumerate() {
            if group.name.trim().is_empty() {
                return Err(AclError::config_with_context(
                    "Group name cannot be empty",
                    format!("group #{}", index),
                ));
            }
            if !names.insert(group.name.as_str()) {
                return Err(AclError::config(format!(
                    "Group '{}' is defined more than once",
                    group.name
                )));
            }
            if group.members.is_empty() {
                warn!(group = %group.name, "group has no members");
            }
        }
        Ok(names)
    }

    fn validate_rules(config: &AclConfig, groups: &HashSet<&str>) -> AclResult<()> {
        for (index, rule) in config.rules.iter().enumerate() {
            let context = format!("rule #{}", index);

            for group in &rule.scope.groups {
                if !groups.contains(group.as_str()) {
                    return Err(AclError::config_with_context(
                        format!("Unknown group '{}' in rule scope", group),
                        context,
                    ));
                }
            }

            for filter in &rule.scope.filters {
                Self::validate_matcher(filter, &context)?;
            }

            match rule.action {
                AclAction::RequireMatcher if rule.matchers.required.is_empty() => {
                    return Err(AclError::config_with_context(
                        "requireMatcher rule must list at least one required matcher",
                        context,
                    ));
                }
                AclAction::Allow | AclAction::Block if !rule.matchers.required.is_empty() => {
                    warn!(
                        rule = index,
                        action = %rule.action,
                        "required matchers are only used by requireMatcher rules"
                    );
                }
                _ => {}
            }

            for required in &rule.matchers.required {
                Self::validate_matcher(required, &context)?;
            }
        }
        Ok(())
    }

    fn validate_subjects(config: &AclConfig) -> AclResult<()> {
        let mut names = HashSet::new();
        for (subject, matchers) in &config.subjects {
            if subject.trim().is_empty() {
                return Err(AclError::config("Subject name cannot be empty"));
            }
            let context = format!("subject '{}'", subject);
            if !names.insert(subject.as_str()) {
                return Err(AclError::config_with_context(
                    format!("Subject '{}' is defined more than once", subject),
                    context,
                ));
            }
            for matcher in matchers {
                Self::validate_matcher(matcher, &context)?;
            }
        }
        Ok(())
    }

    fn validate_matcher(matcher: &MatcherConfig, context: &str) -> AclResult<()> {
        let has_name = matcher.name.as_deref().is_some_and(|n| !n.is_empty());
        let has_name_re = matcher.name_re.is_some();
        if !has_name && !has_name_re {
            return Err(AclError::config_with_context(
                "Matcher must set name or name_re",
                context,
            ));
        }

        for pattern in [&matcher.name_re, &matcher.value_re].into_iter().flatten() {
            if pattern.is_empty() {
                return Err(AclError::config_with_context(
                    "Matcher pattern cannot be empty",
                    context,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{GroupConfig, MatchersConfig, RuleConfig, ScopeConfig};

    fn matcher(name: &str, value: &str) -> MatcherConfig {
        MatcherConfig {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    fn rule(action: AclAction) -> RuleConfig {
        RuleConfig {
            action,
            reason: String::new(),
            scope: ScopeConfig::default(),
            matchers: MatchersConfig::default(),
        }
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(ConfigValidator::validate(&AclConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_group() {
        let mut r = rule(AclAction::Allow);
        r.scope.groups.push("admins".to_string());
        let config = AclConfig {
            rules: vec![r],
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown group 'admins'"));
        assert_eq!(err.context(), Some("rule #0"));
    }

    #[test]
    fn test_duplicate_group() {
        let group = GroupConfig {
            name: "admins".to_string(),
            members: vec!["alice".to_string()],
        };
        let config = AclConfig {
            groups: vec![group.clone(), group],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_empty_group_name() {
        let config = AclConfig {
            groups: vec![GroupConfig {
                name: " ".to_string(),
                members: vec![],
            }],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_require_matcher_needs_required() {
        let config = AclConfig {
            rules: vec![rule(AclAction::RequireMatcher)],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());

        let mut r = rule(AclAction::RequireMatcher);
        r.matchers.required.push(matcher("team", "db"));
        let config = AclConfig {
            rules: vec![r],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_matcher_needs_name() {
        let mut r = rule(AclAction::Block);
        r.scope.filters.push(MatcherConfig {
            value: Some("db".to_string()),
            ..Default::default()
        });
        let config = AclConfig {
            rules: vec![r],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut config = AclConfig::default();
        config.subjects.push((
            "alice".to_string(),
            vec![MatcherConfig {
                name: Some("team".to_string()),
                value_re: Some(String::new()),
                ..Default::default()
            }],
        ));
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(err.context(), Some("subject 'alice'"));
    }

    #[test]
    fn test_name_re_alone_is_enough() {
        let mut config = AclConfig::default();
        config.subjects.push((
            "alice".to_string(),
            vec![MatcherConfig {
                name_re: Some(".+".to_string()),
                ..Default::default()
            }],
        ));
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_duplicate_subject() {
        let mut config = AclConfig::default();
        config
            .subjects
            .push(("alice".to_string(), vec![matcher("team", "ops")]));
        config
            .subjects
            .push(("alice".to_string(), vec![matcher("team", "db")]));

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("Subject 'alice' is defined more than once"));
        assert_eq!(err.context(), Some("subject 'alice'"));
    }
}
