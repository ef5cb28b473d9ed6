//! Ordered rule evaluation

use super::groups::GroupDirectory;
use super::types::{AclAction, AclDecision, AclRule, Silence};
use tracing::debug;

/// Ordered silence ACL rules together with the groups they refer to
#[derive(Debug, Clone, Default)]
pub struct AclRuleSet {
    rules: Vec<AclRule>,
    groups: GroupDirectory,
}

impl AclRuleSet {
    pub fn new(rules: Vec<AclRule>, groups: GroupDirectory) -> Self {
        Self { rules, groups }
    }

    pub fn rules(&self) -> &[AclRule] {
        &self.rules
    }

    pub fn groups(&self) -> &GroupDirectory {
        &self.groups
    }

    /// Decide whether `username` may create `silence` on `alertmanager`
    pub fn evaluate(&self, silence: &Silence, username: &str, alertmanager: &str) -> AclDecision {
        for (index, rule) in self.rules.iter().enumerate() {
            if !self.applies(rule, silence, username, alertmanager) {
                debug!(rule = index, username, alertmanager, "rule scope does not apply");
                continue;
            }

            match rule.action {
                AclAction::Allow => {
                    debug!(rule = index, username, "silence allowed");
                    return AclDecision::Allowed { rule: Some(index) };
                }
                AclAction::Block => {
                    debug!(rule = index, username, reason = %rule.reason, "silence blocked");
                    return blocked(index, rule);
                }
                AclAction::RequireMatcher => {
                    if let Some(missing) = rule.required.iter().find(|r| !silence.has_match(r)) {
                        debug!(
                            rule = index,
                            username,
                            missing = %missing,
                            "silence is missing a required matcher"
                        );
                        return blocked(index, rule);
                    }
                    debug!(rule = index, username, "required matchers present");
                }
            }
        }
        AclDecision::Allowed { rule: None }
    }

    fn applies(
        &self,
        rule: &AclRule,
        silence: &Silence,
        username: &str,
        alertmanager: &str,
    ) -> bool {
        let scope = &rule.scope;

        if !scope.groups.is_empty()
            && !self
                .groups
                .is_member_of_any(scope.groups.as_slice(), username)
        {
            return false;
        }

        if !scope.alertmanagers.is_empty()
            && !scope.alertmanagers.iter().any(|p| p.is_match(alertmanager))
        {
            return false;
        }

        scope.filters.iter().all(|filter| silence.has_match(filter))
    }
}

fn blocked(index: usize, rule: &AclRule) -> AclDecision {
    AclDecision::Blocked {
        rule: index,
        reason: rule.reason.clone(),
    }
}
