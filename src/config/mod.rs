//! Configuration loading and types for miniwiki.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use load::DEFAULT_CONFIG_FILE;
pub use types::{EngineKind, MarkupConfig, PagesConfig, ServerConfig, SiteConfig, ThemeConfig};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}

// =============================================================================
// Top-level config
// =============================================================================

/// The full wiki configuration, as read from `miniwiki.yaml`.
///
/// Every section is optional; a missing file or section falls back to the
/// defaults described on each type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Check the values that deserialization alone can't rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.markup.route_prefix;
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'markup.route_prefix' must start with '/', got '{prefix}'"
            )));
        }
        if prefix.contains("//") || prefix.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'markup.route_prefix' is not a valid path: '{prefix}'"
            )));
        }
        if self.pages.home.trim().is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'pages.home' must name a page".to_string(),
            ));
        }
        if self.pages.extension.is_empty() || self.pages.extension.contains(['.', '/']) {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'pages.extension' must be a bare extension like 'wiki', got '{}'",
                self.pages.extension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.markup.route_prefix, "/page");
        assert_eq!(config.markup.engine, EngineKind::Rewrite);
        assert!(!config.markup.escape_html);
        assert_eq!(config.pages.home, "Main_Page");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_route_prefix_must_be_absolute() {
        let mut config = Config::default();
        config.markup.route_prefix = "page".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_root_route_prefix_is_allowed() {
        let mut config = Config::default();
        config.markup.route_prefix = "/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_home_is_rejected() {
        let mut config = Config::default();
        config.pages.home = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dotted_extension_is_rejected() {
        let mut config = Config::default();
        config.pages.extension = ".wiki".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_of_partial_config() {
        let yaml = "markup:\n  engine: tree\n  escape_html: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.markup.engine, EngineKind::Tree);
        assert!(config.markup.escape_html);
        // Untouched sections keep their defaults
        assert_eq!(config.markup.route_prefix, "/page");
        assert_eq!(config.pages.dir.to_str(), Some("pages"));
    }
}
