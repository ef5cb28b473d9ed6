//! File-based configuration loading

use super::compile::{LoadedAcl, compile};
use super::model::AclConfig;
use super::validation::ConfigValidator;
use crate::error::{AclError, AclResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Deserialize a raw configuration document
    pub fn parse(self, content: &str) -> AclResult<AclConfig> {
        let config = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }
}

/// Parse, validate and compile a configuration document
pub fn load_from_str(content: &str, format: ConfigFormat) -> AclResult<LoadedAcl> {
    let config = format.parse(content)?;
    ConfigValidator::validate(&config)?;
    compile(&config)
}

/// Load an ACL configuration file
///
/// A missing file is an error: running without the configured rules would
/// silently change who may create silences.
pub fn load_from_file(path: &Path) -> AclResult<LoadedAcl> {
    let content = fs::read_to_string(path).map_err(|e| {
        AclError::io_with_path(
            format!("Failed to read ACL config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let loaded = load_from_str(&content, ConfigFormat::from_path(path)).map_err(|e| match e {
        AclError::Config { message, context } => AclError::Config {
            message,
            context: Some(match context {
                Some(context) => format!("{} in '{}'", context, path.display()),
                None => format!("Loading ACL configuration from '{}'", path.display()),
            }),
        },
        other => other,
    })?;

    info!(
        path = %path.display(),
        rules = loaded.rules.rules().len(),
        groups = loaded.rules.groups().len(),
        subjects = loaded.policy.len(),
        "loaded ACL configuration"
    );
    Ok(loaded)
}
