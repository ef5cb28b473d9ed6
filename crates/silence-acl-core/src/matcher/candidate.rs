//! Candidate matchers presented by requests

use crate::error::{AclError, AclResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A matcher taken from an incoming request, e.g. one matcher of a
/// proposed silence
///
/// `is_regex` says whether the candidate itself is a pattern-type matcher
/// upstream. It has nothing to do with whether a rule uses a pattern to
/// test it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMatcher {
    pub name: String,
    pub value: String,
    #[serde(rename = "isRegex", default)]
    pub is_regex: bool,
    #[serde(rename = "isEqual", default = "default_is_equal")]
    pub is_equal: bool,
}

fn default_is_equal() -> bool {
    true
}

impl CandidateMatcher {
    /// Create a candidate with both mode flags unset
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_regex: false,
            is_equal: false,
        }
    }

    pub fn with_regex(mut self, is_regex: bool) -> Self {
        self.is_regex = is_regex;
        self
    }

    pub fn with_equal(mut self, is_equal: bool) -> Self {
        self.is_equal = is_equal;
        self
    }

    /// The upstream operator for this candidate's flags
    pub fn operator(&self) -> &'static str {
        match (self.is_equal, self.is_regex) {
            (true, false) => "=",
            (false, false) => "!=",
            (true, true) => "=~",
            (false, true) => "!~",
        }
    }
}

/// Writes the value quoted, escaping only double quotes and backslashes,
/// so the output parses back to the same candidate.
impl fmt::Display for CandidateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\"", self.name, self.operator())?;
        for c in self.value.chars() {
            if matches!(c, '"' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

/// Parses the upstream matcher syntax: `name=value`, `name!=value`,
/// `name=~regex` and `name!~regex`. The value may be wrapped in double
/// quotes.
impl FromStr for CandidateMatcher {
    type Err = AclError;

    fn from_str(input: &str) -> AclResult<Self> {
        let (index, operator) = find_operator(input)
            .ok_or_else(|| AclError::invalid_matcher(input, "missing operator"))?;

        let name = input[..index].trim();
        if name.is_empty() {
            return Err(AclError::invalid_matcher(input, "empty label name"));
        }
        let value = unquote(input, input[index + operator.len()..].trim())?;

        let (is_equal, is_regex) = match operator {
            "=" => (true, false),
            "!=" => (false, false),
            "=~" => (true, true),
            _ => (false, true),
        };

        Ok(Self {
            name: name.to_string(),
            value,
            is_regex,
            is_equal,
        })
    }
}

fn find_operator(input: &str) -> Option<(usize, &'static str)> {
    for (index, _) in input.char_indices() {
        let rest = &input[index..];
        for operator in ["!=", "!~", "=~", "="] {
            if rest.starts_with(operator) {
                return Some((index, operator));
            }
        }
    }
    None
}

fn unquote(input: &str, value: &str) -> AclResult<String> {
    let Some(inner) = value.strip_prefix('"') else {
        return Ok(value.to_string());
    };
    let inner = inner
        .strip_suffix('"')
        .ok_or_else(|| AclError::invalid_matcher(input, "unterminated quoted value"))?;

    let mut unescaped = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => unescaped.push(escaped),
                None => return Err(AclError::invalid_matcher(input, "dangling escape")),
            }
        } else {
            unescaped.push(c);
        }
    }
    Ok(unescaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_flags_to_false() {
        let candidate = CandidateMatcher::new("foo", "bar");
        assert!(!candidate.is_regex);
        assert!(!candidate.is_equal);
    }

    #[test]
    fn test_parse_operators() {
        let m: CandidateMatcher = "env=prod".parse().unwrap();
        assert_eq!((m.name.as_str(), m.value.as_str()), ("env", "prod"));
        assert!(m.is_equal && !m.is_regex);

        let m: CandidateMatcher = "env!=prod".parse().unwrap();
        assert!(!m.is_equal && !m.is_regex);

        let m: CandidateMatcher = "env=~prod|dev".parse().unwrap();
        assert_eq!(m.value, "prod|dev");
        assert!(m.is_equal && m.is_regex);

        let m: CandidateMatcher = "env!~dev.*".parse().unwrap();
        assert!(!m.is_equal && m.is_regex);
    }

    #[test]
    fn test_parse_value_with_operator_characters() {
        let m: CandidateMatcher = "query=a=b".parse().unwrap();
        assert_eq!(m.name, "query");
        assert_eq!(m.value, "a=b");
    }

    #[test]
    fn test_parse_quoted_value() {
        let m: CandidateMatcher = r#"summary = "disk \"full\"""#.parse().unwrap();
        assert_eq!(m.name, "summary");
        assert_eq!(m.value, "disk \"full\"");

        let m: CandidateMatcher = r#"env="""#.parse().unwrap();
        assert_eq!(m.value, "");
    }

    #[test]
    fn test_parse_errors() {
        assert!("env".parse::<CandidateMatcher>().is_err());
        assert!("=prod".parse::<CandidateMatcher>().is_err());
        assert!(r#"env="prod"#.parse::<CandidateMatcher>().is_err());
    }

    #[test]
    fn test_display_round_trips_operator() {
        let m = CandidateMatcher::new("env", "prod").with_equal(true);
        assert_eq!(m.to_string(), "env=\"prod\"");
        let m = CandidateMatcher::new("env", "pr.*").with_regex(true);
        assert_eq!(m.to_string(), "env!~\"pr.*\"");
    }

    #[test]
    fn test_display_round_trips_value() {
        for value in ["a\nb", "tab\there", r#"say "hi""#, r"back\slash", ""] {
            let m = CandidateMatcher::new("msg", value).with_equal(true);
            let parsed: CandidateMatcher = m.to_string().parse().unwrap();
            assert_eq!(parsed, m);
        }

        let m = CandidateMatcher::new("msg", "a\nb");
        assert_eq!(m.to_string(), "msg!=\"a\nb\"");
    }

    #[test]
    fn test_deserialize_upstream_shape() {
        let m: CandidateMatcher =
            serde_json::from_str(r#"{"name": "env", "value": "prod", "isRegex": true}"#).unwrap();
        assert!(m.is_regex);
        assert!(m.is_equal);

        let m: CandidateMatcher = serde_json::from_str(
            r#"{"name": "env", "value": "prod", "isRegex": false, "isEqual": false}"#,
        )
        .unwrap();
        assert!(!m.is_equal);
    }
}
