//! Core error type for the silence ACL

use thiserror::Error;

/// Result type alias for silence ACL operations
pub type AclResult<T> = Result<T, AclError>;

/// Main error type for the silence ACL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AclError {
    /// A configured regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Matcher text that could not be parsed
    #[error("Invalid matcher '{input}': {message}")]
    InvalidMatcher { input: String, message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl AclError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "ACL_INVALID_PATTERN",
            Self::Config { .. } => "ACL_CONFIG",
            Self::InvalidMatcher { .. } => "ACL_INVALID_MATCHER",
            Self::Io { .. } => "ACL_IO",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            Self::InvalidPattern { .. } | Self::InvalidMatcher { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AclError::invalid_pattern("(", "unclosed group").error_code(),
            "ACL_INVALID_PATTERN"
        );
        assert_eq!(AclError::config("bad").error_code(), "ACL_CONFIG");
        assert_eq!(
            AclError::invalid_matcher("foo", "missing operator").error_code(),
            "ACL_INVALID_MATCHER"
        );
        assert_eq!(
            AclError::io_with_path("denied", "/etc/acl.yaml").error_code(),
            "ACL_IO"
        );
    }

    #[test]
    fn test_display() {
        let err = AclError::invalid_pattern("(", "unclosed group");
        assert_eq!(err.to_string(), "Invalid pattern '(': unclosed group");

        let err = AclError::config_with_context("unknown group 'ops'", "rule #2");
        assert_eq!(err.to_string(), "Configuration error: unknown group 'ops'");
        assert_eq!(err.context(), Some("rule #2"));
    }
}
