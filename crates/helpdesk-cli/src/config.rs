//! CLI configuration: where the archive and audit trails live.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

/// Contents of `helpdesk.toml`; every field is optional and defaulted.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".helpdesk/data"),
            log_dir: PathBuf::from(".helpdesk/logs"),
        }
    }
}

impl Config {
    /// Load from `path` when it exists; a missing file means defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io {
                path: path.to_string(),
                source: err,
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_missing_file_means_defaults() {
        let config = Config::load("/nonexistent/helpdesk.toml").expect("defaults");
        assert_eq!(config.data_dir, PathBuf::from(".helpdesk/data"));
        assert_eq!(config.log_dir, PathBuf::from(".helpdesk/logs"));
    }

    #[test]
    fn partial_files_keep_the_other_defaults() {
        let config: Config = toml::from_str("data_dir = \"/srv/desk\"").expect("valid toml");
        assert_eq!(config.data_dir, PathBuf::from("/srv/desk"));
        assert_eq!(config.log_dir, PathBuf::from(".helpdesk/logs"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("data_base = \"x\"").is_err());
    }
}
