use crate::error::{PrepError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Root directory holding the raw/cleaned/mapped stage directories.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Directory for rotating log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Stored-carbon factor reference, keyed by Tally material name.
    #[serde(default = "default_stored_carbon_reference")]
    pub stored_carbon_reference: String,
}

fn default_data_root() -> String {
    "data/lca_results".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stored_carbon_reference() -> String {
    "references/stored_carbon_database.csv".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            data_root: default_data_root(),
            log_dir: default_log_dir(),
            stored_carbon_reference: default_stored_carbon_reference(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given TOML file. A missing file is not an
    /// error; the built-in defaults apply.
    pub fn load(config_path: &str) -> Result<Self> {
        let config_content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(PrepError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path, e
                )))
            }
        };

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = Config::load("does-not-exist.toml").unwrap();
        assert_eq!(config.paths.data_root, "data/lca_results");
        assert_eq!(config.paths.log_dir, "logs");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[paths]\ndata_root = \"elsewhere\"\n").unwrap();
        assert_eq!(config.paths.data_root, "elsewhere");
        assert_eq!(config.paths.log_dir, "logs");
    }
}
