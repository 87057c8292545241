//! Engine configuration.
//!
//! Loaded from defaults, then an optional TOML file, then `PROTOCOL_*`
//! environment variables (later sources win).
//!
//! ```toml
//! log_level = "info"
//! log_dir = "/var/log/protocol"
//! database_path = "/var/lib/protocol/records.sqlite3"
//! ```

use crate::logging::default_log_level;
use config_crate::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Prefix of the environment layer; `PROTOCOL_LOG_LEVEL` sets `log_level`.
pub const ENV_PREFIX: &str = "PROTOCOL";
pub const ENV_LOG_LEVEL: &str = "PROTOCOL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROTOCOL_LOG_DIR";
pub const ENV_DATABASE_PATH: &str = "PROTOCOL_DATABASE_PATH";

const SUPPORTED_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub log_level: String,
    /// File logging is skipped when unset.
    pub log_dir: Option<PathBuf>,
    pub database_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            database_path: PathBuf::from("protocol_records.sqlite3"),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// A layer could not be read, parsed or deserialized.
    Load(config_crate::ConfigError),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "cannot load config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<config_crate::ConfigError> for ConfigError {
    fn from(value: config_crate::ConfigError) -> Self {
        Self::Load(value)
    }
}

impl EngineConfig {
    /// Parses TOML text; keys that are left out keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Full load: defaults, optional file, process environment, validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Self::load`], reading the environment layer from `env` instead
    /// of the process environment when given.
    ///
    /// Blank environment values are ignored.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .ignore_empty(true)
                .source(env),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.trim().to_ascii_lowercase();
        if !SUPPORTED_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unsupported log_level `{}`",
                self.log_level
            )));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database_path cannot be empty".to_string()));
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be absolute, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EngineConfig, ENV_DATABASE_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use config_crate::Map;
    use std::io::Write;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = EngineConfig::from_toml_str("database_path = \"/tmp/r.db\"").unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/r.db"));
        assert_eq!(config.log_level, EngineConfig::default().log_level);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn no_file_and_empty_environment_yield_defaults() {
        let config = EngineConfig::load_with_env(None, Some(Map::new())).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        writeln!(file, "database_path = \"/srv/records.db\"").unwrap();

        let config = EngineConfig::load_with_env(
            Some(file.path()),
            Some(env(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_LOG_DIR, "/var/log/protocol"),
                (ENV_DATABASE_PATH, ""),
            ])),
        )
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/protocol")));
        assert_eq!(config.database_path, PathBuf::from("/srv/records.db"));
    }

    #[test]
    fn environment_values_are_validated() {
        let err = EngineConfig::load_with_env(None, Some(env(&[(ENV_LOG_DIR, "logs")])))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn validation_rejects_bad_level_and_relative_log_dir() {
        let config = EngineConfig {
            log_level: "loud".to_string(),
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = EngineConfig {
            log_dir: Some(PathBuf::from("logs")),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_file_and_reports_parse_errors() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "log_level = \"error\"").unwrap();
        let config = EngineConfig::load_with_env(Some(good.path()), Some(Map::new())).unwrap();
        assert_eq!(config.log_level, "error");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "log_level = ").unwrap();
        assert!(matches!(
            EngineConfig::load_with_env(Some(bad.path()), Some(Map::new())),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            EngineConfig::load_with_env(Some(&missing), Some(Map::new())),
            Err(ConfigError::Load(_))
        ));
    }
}
