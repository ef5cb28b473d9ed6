//! Raw configuration model

use crate::acl::AclAction;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Top-level ACL configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AclConfig {
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    /// Required matchers per subject for [`crate::SubjectPolicy`]
    ///
    /// Kept as written, duplicate keys included, so validation can reject
    /// a subject defined twice instead of the parser dropping one.
    #[serde(
        default,
        serialize_with = "serialize_subjects",
        deserialize_with = "deserialize_subjects"
    )]
    pub subjects: Vec<(String, Vec<MatcherConfig>)>,
}

fn serialize_subjects<S>(
    subjects: &[(String, Vec<MatcherConfig>)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(subjects.len()))?;
    for (subject, matchers) in subjects {
        map.serialize_entry(subject, matchers)?;
    }
    map.end()
}

fn deserialize_subjects<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, Vec<MatcherConfig>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SubjectsVisitor;

    impl<'de> Visitor<'de> for SubjectsVisitor {
        type Value = Vec<(String, Vec<MatcherConfig>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of subject names to matcher lists")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut subjects = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, Vec<MatcherConfig>>()? {
                subjects.push(entry);
            }
            Ok(subjects)
        }
    }

    deserializer.deserialize_map(SubjectsVisitor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub action: AclAction,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub matchers: MatchersConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    #[serde(default)]
    pub groups: Vec<String>,
    /// Alertmanager name patterns, anchored at load time
    #[serde(default)]
    pub alertmanagers: Vec<String>,
    #[serde(default)]
    pub filters: Vec<MatcherConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchersConfig {
    #[serde(default)]
    pub required: Vec<MatcherConfig>,
}

/// One configured matcher
///
/// `name_re` / `value_re` take precedence over `name` / `value` when both
/// are present. `isEqual` defaults to `true`, the upstream default for a
/// positive matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_re: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_re: Option<String>,
    #[serde(rename = "isRegex", alias = "is_regex", default)]
    pub is_regex: bool,
    #[serde(rename = "isEqual", alias = "is_equal", default = "default_is_equal")]
    pub is_equal: bool,
}

fn default_is_equal() -> bool {
    true
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            name: None,
            name_re: None,
            value: None,
            value_re: None,
            is_regex: false,
            is_equal: default_is_equal(),
        }
    }
}
