//! Configuration loading from files.
//!
//! The YAML file is optional. Values can be overridden from the environment
//! with `MINIWIKI__<SECTION>__<KEY>`, e.g. `MINIWIKI__SERVER__PORT=9000`.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Config, ConfigError};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "miniwiki.yaml";

impl Config {
    /// Absolute path of the config file named on the command line,
    /// defaulting to `miniwiki.yaml` in the current directory
    pub fn path_from_arg(config_file: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        if config_file.is_relative() {
            Ok(std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file))
        } else {
            Ok(config_file.to_path_buf())
        }
    }

    /// Load the config from a file path
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
        }

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(false))
            .add_source(
                config::Environment::with_prefix("MINIWIKI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Config>()?;

        config.validate()?;
        Ok(config)
    }
}
