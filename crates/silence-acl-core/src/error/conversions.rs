//! From trait implementations for AclError conversions

use super::types::AclError;

impl From<serde_json::Error> for AclError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(format!("Failed to parse JSON: {}", error))
    }
}

impl From<serde_yaml::Error> for AclError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("Failed to parse YAML: {}", error))
    }
}

impl From<toml::de::Error> for AclError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML: {}", error))
    }
}
