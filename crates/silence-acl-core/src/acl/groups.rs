//! Group membership lookup

use std::collections::{HashMap, HashSet};

/// Group name to member usernames
#[derive(Debug, Clone, Default)]
pub struct GroupDirectory {
    groups: HashMap<String, HashSet<String>>,
}

impl GroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, merging members if it already exists
    pub fn insert<I, S>(&mut self, group: impl Into<String>, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .entry(group.into())
            .or_default()
            .extend(members.into_iter().map(Into::into));
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    pub fn is_member(&self, group: &str, username: &str) -> bool {
        self.groups
            .get(group)
            .is_some_and(|members| members.contains(username))
    }

    /// Whether `username` belongs to at least one of `groups`
    pub fn is_member_of_any<S: AsRef<str>>(&self, groups: &[S], username: &str) -> bool {
        groups
            .iter()
            .any(|group| self.is_member(group.as_ref(), username))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
