use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use log::info;
use serde::Deserialize;

pub(crate) static DEFAULT_CSV_PATH: &str = "./raw_data/master_chase_visa_activity_2023_08_04_2025_08_04.CSV";
pub(crate) const DEFAULT_WINDOW_DAYS: u32 = 365;
pub(crate) const DEFAULT_LIMIT: usize = 50;

/// Where to read transactions from and how to shape the report
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) csv_path: PathBuf,
    pub(crate) window_days: u32,
    pub(crate) limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            window_days: DEFAULT_WINDOW_DAYS,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// `~/.config/spendrank/config.toml` on Linux, or the platform equivalent
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spendrank").join("config.toml"))
    }

    /// Load config from a TOML file. A missing file gives the built-in defaults.
    pub(crate) fn load_from_file(file_path: &Path) -> anyhow::Result<Config> {
        if !file_path.is_file() {
            return Ok(Config::default());
        }

        info!("Loading config from {}", file_path.display());
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Unable to read config file {}", file_path.display()))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("Invalid config file {}", file_path.display()))?;
        Ok(config)
    }

    pub(crate) fn with_overrides(mut self, csv_path: Option<PathBuf>, window_days: Option<u32>, limit: Option<usize>) -> Config {
        if let Some(csv_path) = csv_path {
            self.csv_path = csv_path;
        }
        if let Some(window_days) = window_days {
            self.window_days = window_days;
        }
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::csv_reader::tests::fixture_filename;
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
        assert_eq!(config.window_days, 365);
        assert_eq!(config.limit, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from_file(&fixture_filename("no_such_config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::load_from_file(&fixture_filename("config.toml")).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("fixture/activity.csv"));
        assert_eq!(config.limit, 10);
        assert_eq!(config.window_days, DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn test_malformed_file() {
        assert!(Config::load_from_file(&fixture_filename("bad_config.toml")).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("other.csv")), None, Some(5));
        assert_eq!(config.csv_path, PathBuf::from("other.csv"));
        assert_eq!(config.window_days, 365);
        assert_eq!(config.limit, 5);
    }
}
